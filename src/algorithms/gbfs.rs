use crate::algorithms::common::{manhattan, SearchAlgorithm, SearchOutcome};
use crate::grid::{Grid, GridError, Position};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier record ordered by the heuristic alone; no cost accumulates.
#[derive(Clone, PartialEq, Eq)]
struct Entry {
    h: u32,
    pos: Position,
    path: Vec<Position>,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed comparison to make BinaryHeap a min-heap. Ties in h break on
    // the current cell, then on the path lexicographically.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .h
            .cmp(&self.h)
            .then_with(|| other.pos.cmp(&self.pos))
            .then_with(|| other.path.cmp(&self.path))
    }
}

/// Greedy Best-First Search: always expands the cell that looks closest to
/// the goal. Fast on open maps, but the path it returns carries no cost
/// guarantee.
#[derive(Default)]
pub struct Gbfs;

impl Gbfs {
    pub fn new() -> Self {
        Gbfs
    }
}

impl SearchAlgorithm for Gbfs {
    fn name(&self) -> &'static str {
        "GBFS"
    }

    fn search(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome, GridError> {
        let mut frontier = BinaryHeap::new();
        frontier.push(Entry {
            h: manhattan(start, goal),
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

            if !visited.insert(entry.pos) {
                continue;
            }

            for neighbor in grid.neighbors(entry.pos) {
                if visited.contains(&neighbor) {
                    continue;
                }
                let mut path = entry.path.clone();
                path.push(neighbor);
                frontier.push(Entry {
                    h: manhattan(neighbor, goal),
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
