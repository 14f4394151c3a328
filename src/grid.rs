use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// A grid coordinate, 0-indexed, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// One terrain marker, decided once at grid-load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    /// Cost paid when entering this cell. Always >= 1.
    Cost(u32),
    Wall,
    Start,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Start,
    Goal,
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentinel::Start => write!(f, "start marker 'S'"),
            Sentinel::Goal => write!(f, "goal marker 'G'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The start or goal marker is absent; the run cannot proceed.
    SentinelNotFound(Sentinel),
    /// A lookup outside grid bounds. `neighbors` never yields such a cell,
    /// so seeing this from a search indicates an engine bug.
    InvalidCell(Position),
    /// The grid text could not be parsed into a valid terrain map.
    Malformed(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::SentinelNotFound(s) => write!(f, "grid has no {}", s),
            GridError::InvalidCell(p) => {
                write!(f, "cell ({}, {}) is outside the grid", p.row, p.col)
            }
            GridError::Malformed(msg) => write!(f, "malformed grid: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

/// The map shipped with the tool, used when no other grid source is given.
pub const DEFAULT_MAP: &str = "\
S 1 2 3 # 5 6
1 # 3 # 6 # 7
2 2 3 4 5 6 8
# 4 # # 6 # 7
3 2 1 2 3 4 G";

#[derive(Debug)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<Terrain>>,
}

impl Grid {
    /// Generate a random static grid: start in the top-left quadrant, goal in
    /// the bottom-right, walls placed with bounded retries, costs in 1..=9.
    /// The same seed always yields the same grid.
    pub fn generate(size: usize, num_walls: usize, seed: u64) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

        let mut cells: Vec<Vec<Terrain>> = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| Terrain::Cost(rng.gen_range(1..=9)))
                    .collect()
            })
            .collect();

        let start = Position {
            row: rng.gen_range(0..size / 2),
            col: rng.gen_range(0..size / 2),
        };
        let goal = Position {
            row: rng.gen_range(size / 2..size),
            col: rng.gen_range(size / 2..size),
        };
        cells[start.row][start.col] = Terrain::Start;
        cells[goal.row][goal.col] = Terrain::Goal;

        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < num_walls && attempts < num_walls * 3 {
            let row = rng.gen_range(0..size);
            let col = rng.gen_range(0..size);
            if matches!(cells[row][col], Terrain::Cost(_)) {
                cells[row][col] = Terrain::Wall;
                walls_placed += 1;
            }
            attempts += 1;
        }

        Grid {
            rows: size,
            cols: size,
            cells,
        }
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cost paid when entering `pos`. Start and goal count as cost 1.
    pub fn cost(&self, pos: Position) -> Result<u32, GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::InvalidCell(pos));
        }
        match self.cells[pos.row][pos.col] {
            Terrain::Cost(c) => Ok(c),
            // Non-numeric markers cost 1 to enter. Walls are filtered out by
            // `neighbors` before cost is ever asked.
            Terrain::Start | Terrain::Goal | Terrain::Wall => Ok(1),
        }
    }

    pub fn is_traversable(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[pos.row][pos.col] != Terrain::Wall
    }

    /// Traversable cardinal neighbors, in the fixed order north, south, west,
    /// east. Search tie-breaking depends on this order staying put.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let (row, col) = (pos.row as i64, pos.col as i64);
        let mut neighbors = Vec::with_capacity(4);

        for (drow, dcol) in &[(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let nrow = row + drow;
            let ncol = col + dcol;
            if nrow >= 0 && ncol >= 0 {
                let next = Position {
                    row: nrow as usize,
                    col: ncol as usize,
                };
                if self.is_traversable(next) {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }

    /// Row-major scan for the first cell bearing the given sentinel.
    pub fn find(&self, sentinel: Sentinel) -> Result<Position, GridError> {
        let wanted = match sentinel {
            Sentinel::Start => Terrain::Start,
            Sentinel::Goal => Terrain::Goal,
        };
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == wanted {
                    return Ok(Position { row, col });
                }
            }
        }
        Err(GridError::SentinelNotFound(sentinel))
    }

    pub fn traversable_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Terrain::Wall)
            .count()
    }

    fn marker(&self, pos: Position) -> String {
        match self.cells[pos.row][pos.col] {
            Terrain::Cost(c) => c.to_string(),
            Terrain::Wall => "#".to_string(),
            Terrain::Start => "S".to_string(),
            Terrain::Goal => "G".to_string(),
        }
    }

    /// Render the grid with every path cell (start and goal excepted)
    /// replaced by `*`. One row per line, cells space-separated.
    pub fn render_with_path(&self, path: &[Position]) -> String {
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let mut markers = Vec::with_capacity(self.cols);
            for col in 0..self.cols {
                let pos = Position { row, col };
                let on_path = path.contains(&pos)
                    && !matches!(self.cells[row][col], Terrain::Start | Terrain::Goal);
                if on_path {
                    markers.push("*".to_string());
                } else {
                    markers.push(self.marker(pos));
                }
            }
            lines.push(markers.join(" "));
        }
        lines.join("\n")
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse whitespace-separated markers: `S`, `G`, `#`, or a cost >= 1.
    /// Rows must be equal length; each sentinel may appear at most once
    /// (presence is checked later by `find`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells: Vec<Vec<Terrain>> = Vec::new();
        let mut seen_start = false;
        let mut seen_goal = false;

        for (line_no, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let cell = match token {
                    "S" => {
                        if seen_start {
                            return Err(GridError::Malformed(
                                "more than one start marker 'S'".to_string(),
                            ));
                        }
                        seen_start = true;
                        Terrain::Start
                    }
                    "G" => {
                        if seen_goal {
                            return Err(GridError::Malformed(
                                "more than one goal marker 'G'".to_string(),
                            ));
                        }
                        seen_goal = true;
                        Terrain::Goal
                    }
                    "#" => Terrain::Wall,
                    _ => match token.parse::<u32>() {
                        Ok(cost) if cost >= 1 => Terrain::Cost(cost),
                        Ok(_) => {
                            return Err(GridError::Malformed(format!(
                                "cost must be >= 1, got '{}' on line {}",
                                token,
                                line_no + 1
                            )))
                        }
                        Err(_) => {
                            return Err(GridError::Malformed(format!(
                                "unknown marker '{}' on line {}",
                                token,
                                line_no + 1
                            )))
                        }
                    },
                };
                row.push(cell);
            }
            if let Some(first) = cells.first() {
                if row.len() != first.len() {
                    return Err(GridError::Malformed(format!(
                        "line {} has {} cells, expected {}",
                        line_no + 1,
                        row.len(),
                        first.len()
                    )));
                }
            }
            cells.push(row);
        }

        if cells.is_empty() {
            return Err(GridError::Malformed("grid is empty".to_string()));
        }

        Ok(Grid {
            rows: cells.len(),
            cols: cells[0].len(),
            cells,
        })
    }
}
