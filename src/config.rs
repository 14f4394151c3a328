use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Load the terrain map from a text file instead of the built-in map.
    #[arg(long)]
    pub grid_file: Option<PathBuf>,

    /// Generate a seeded random map instead of the built-in one.
    #[arg(long, default_value_t = false)]
    pub random_grid: bool,

    #[arg(long, default_value_t = 10)]
    pub grid_size: usize,

    #[arg(long, default_value_t = 25)]
    pub num_walls: usize,

    /// Seed for --random-grid; the same seed reproduces the same map.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Which search to run: "a_star", "gbfs", or "all" to compare both.
    #[arg(long, default_value = "all")]
    pub algorithm: String,

    /// Skip the grid rendering, print only the summary lines.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
