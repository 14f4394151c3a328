use crate::algorithms::common::{SearchAlgorithm, SearchOutcome};
use crate::grid::{Grid, GridError, Position};
use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// One algorithm's result with the wall-clock time of the full call.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub name: &'static str,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
}

/// Run one search to completion, timing the whole call.
pub fn run_timed(
    algorithm: &dyn SearchAlgorithm,
    grid: &Grid,
    start: Position,
    goal: Position,
) -> Result<RunReport, GridError> {
    let timer = Instant::now();
    let outcome = algorithm.search(grid, start, goal)?;
    let elapsed = timer.elapsed();
    Ok(RunReport {
        name: algorithm.name(),
        outcome,
        elapsed,
    })
}

impl RunReport {
    pub fn summary_line(&self) -> String {
        format!(
            "Visited Nodes: {}, Time: {:.3} ms",
            self.outcome.nodes_expanded,
            self.elapsed.as_secs_f64() * 1000.0
        )
    }

    /// The per-run block: header, path overlay (unless quiet or no path),
    /// summary line.
    pub fn render(&self, grid: &Grid, quiet: bool) -> String {
        let mut out = format!("=== {} Path ===\n", self.name);
        match &self.outcome.path {
            Some(path) if !quiet => {
                out.push_str(&grid.render_with_path(path));
                out.push('\n');
            }
            Some(_) => {}
            None => out.push_str("No path found.\n"),
        }
        out.push_str(&self.summary_line());
        out
    }
}

/// The final verdict: was A* faster, and did it expand fewer nodes.
pub fn comparison_line(astar: &RunReport, gbfs: &RunReport) -> String {
    let speed = match astar.elapsed.cmp(&gbfs.elapsed) {
        Ordering::Less => "was faster than",
        Ordering::Greater => "was slower than",
        Ordering::Equal => "took the same time as",
    };
    let nodes = match astar
        .outcome
        .nodes_expanded
        .cmp(&gbfs.outcome.nodes_expanded)
    {
        Ordering::Less => "expanded fewer nodes than",
        Ordering::Greater => "expanded more nodes than",
        Ordering::Equal => "expanded the same number of nodes as",
    };
    format!("A* {} and {} GBFS.", speed, nodes)
}
