use crate::grid::{Grid, GridError, Position};

/// Manhattan distance between two cells. Admissible for 4-directional
/// movement here because every edge weight is at least 1.
pub fn manhattan(a: Position, b: Position) -> u32 {
    let drow = (a.row as i64 - b.row as i64).unsigned_abs();
    let dcol = (a.col as i64 - b.col as i64).unsigned_abs();
    (drow + dcol) as u32
}

/// Outcome of one search run. A `None` path means the goal was unreachable,
/// which is a normal terminal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Option<Vec<Position>>,
    /// Pops from the frontier, stale lazy-deletion re-pops included.
    pub nodes_expanded: usize,
}

pub trait SearchAlgorithm {
    fn name(&self) -> &'static str;

    fn search(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome, GridError>;
}

/// Sum of entered-cell costs along a path, start excluded. Totals are u64:
/// cell markers top out at u32, so a path held in memory cannot overflow.
pub fn path_cost(grid: &Grid, path: &[Position]) -> Result<u64, GridError> {
    let mut total = 0u64;
    for &pos in path.iter().skip(1) {
        total += u64::from(grid.cost(pos)?);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position { row: 0, col: 5 };
        let b = Position { row: 3, col: 1 };
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn path_cost_excludes_start() {
        let grid: Grid = "S 2 3 G".parse().unwrap();
        let path = vec![
            Position { row: 0, col: 0 },
            Position { row: 0, col: 1 },
            Position { row: 0, col: 2 },
            Position { row: 0, col: 3 },
        ];
        // 2 + 3 + 1 (goal enters at cost 1)
        assert_eq!(path_cost(&grid, &path).unwrap(), 6);
    }
}
