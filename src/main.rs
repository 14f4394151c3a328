use clap::Parser;

use informed_pathfinding::algorithms::a_star::AStar;
use informed_pathfinding::algorithms::common::SearchAlgorithm;
use informed_pathfinding::algorithms::gbfs::Gbfs;
use informed_pathfinding::config::Config;
use informed_pathfinding::grid::{Grid, Position, Sentinel, DEFAULT_MAP};
use informed_pathfinding::report;

fn main() {
    let config = Config::parse();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let grid = load_grid(config)?;
    // Missing sentinels abort here, before any search runs.
    let start = grid.find(Sentinel::Start)?;
    let goal = grid.find(Sentinel::Goal)?;

    match config.algorithm.as_str() {
        "all" => {
            let gbfs = report::run_timed(&Gbfs::new(), &grid, start, goal)?;
            println!("{}\n", gbfs.render(&grid, config.quiet));

            let astar = report::run_timed(&AStar::new(), &grid, start, goal)?;
            println!("{}\n", astar.render(&grid, config.quiet));

            println!("=== Comparison Summary ===");
            println!("{}", report::comparison_line(&astar, &gbfs));
        }
        "a_star" => run_single(&AStar::new(), config, &grid, start, goal)?,
        "gbfs" => run_single(&Gbfs::new(), config, &grid, start, goal)?,
        other => {
            return Err(format!(
                "unknown algorithm '{}', expected 'a_star', 'gbfs', or 'all'",
                other
            )
            .into());
        }
    }

    Ok(())
}

fn run_single(
    algorithm: &dyn SearchAlgorithm,
    config: &Config,
    grid: &Grid,
    start: Position,
    goal: Position,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = report::run_timed(algorithm, grid, start, goal)?;
    println!("{}", result.render(grid, config.quiet));
    Ok(())
}

fn load_grid(config: &Config) -> Result<Grid, Box<dyn std::error::Error>> {
    if config.random_grid {
        Ok(Grid::generate(config.grid_size, config.num_walls, config.seed))
    } else if let Some(path) = &config.grid_file {
        let text = std::fs::read_to_string(path)?;
        Ok(text.parse()?)
    } else {
        Ok(DEFAULT_MAP.parse()?)
    }
}
