use crate::algorithms::common::{manhattan, SearchAlgorithm, SearchOutcome};
use crate::grid::{Grid, GridError, Position};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier record: f = g + h, cost so far, current cell, path so far.
/// f and g are u64: cell markers top out at u32, so accumulation along any
/// path that fits in memory cannot overflow.
#[derive(Clone, PartialEq, Eq)]
struct Entry {
    f: u64,
    g: u64,
    pos: Position,
    path: Vec<Position>,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed comparison to make BinaryHeap a min-heap. Ties in f break on
    // g, then on the current cell, then on the path lexicographically, so
    // identical inputs always pop in the same order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.pos.cmp(&self.pos))
            .then_with(|| other.path.cmp(&self.path))
    }
}

/// A* over the grid: orders the frontier by cost-so-far plus the Manhattan
/// estimate. With an admissible heuristic the returned path has minimum cost
/// among loop-free paths.
#[derive(Default)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }
}

impl SearchAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome, GridError> {
        let mut frontier = BinaryHeap::new();
        frontier.push(Entry {
            f: u64::from(manhattan(start, goal)),
            g: 0,
            pos: start,
            path: vec![start],
        });

        let mut visited: FxHashSet<Position> = FxHashSet::default();
        let mut nodes_expanded = 0;

        while let Some(entry) = frontier.pop() {
            nodes_expanded += 1;

            if entry.pos == goal {
                return Ok(SearchOutcome {
                    path: Some(entry.path),
                    nodes_expanded,
                });
            }

            // Lazy deletion: stale entries stay in the heap and are skipped
            // here after counting the pop.
            if !visited.insert(entry.pos) {
                continue;
            }

            for neighbor in grid.neighbors(entry.pos) {
                if visited.contains(&neighbor) {
                    continue;
                }
                // Cost belongs to the cell being entered, not the one left.
                let g = entry.g + u64::from(grid.cost(neighbor)?);
                let mut path = entry.path.clone();
                path.push(neighbor);
                frontier.push(Entry {
                    f: g + u64::from(manhattan(neighbor, goal)),
                    g,
                    pos: neighbor,
                    path,
                });
            }
        }

        Ok(SearchOutcome {
            path: None,
            nodes_expanded,
        })
    }
}
