use informed_pathfinding::algorithms::a_star::AStar;
use informed_pathfinding::algorithms::common::{path_cost, SearchAlgorithm, SearchOutcome};
use informed_pathfinding::algorithms::gbfs::Gbfs;
use informed_pathfinding::grid::{Grid, Position, Sentinel, DEFAULT_MAP};

fn endpoints(grid: &Grid) -> (Position, Position) {
    (
        grid.find(Sentinel::Start).unwrap(),
        grid.find(Sentinel::Goal).unwrap(),
    )
}

fn pos(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// First cell is start, last is goal, consecutive cells 4-adjacent, no repeats.
fn assert_valid_path(path: &[Position], start: Position, goal: Position) {
    assert_eq!(*path.first().unwrap(), start);
    assert_eq!(*path.last().unwrap(), goal);
    for pair in path.windows(2) {
        let dr = (pair[0].row as i64 - pair[1].row as i64).abs();
        let dc = (pair[0].col as i64 - pair[1].col as i64).abs();
        assert_eq!(dr + dc, 1, "cells {:?} and {:?} not adjacent", pair[0], pair[1]);
    }
    let mut seen = std::collections::HashSet::new();
    for cell in path {
        assert!(seen.insert(cell), "cell {:?} repeats in path", cell);
    }
}

/// Independent minimum-cost answer from the pathfinding crate.
fn oracle_cost(grid: &Grid, start: Position, goal: Position) -> Option<u64> {
    pathfinding::prelude::astar(
        &start,
        |&p| {
            grid.neighbors(p)
                .into_iter()
                .map(|n| (n, u64::from(grid.cost(n).unwrap())))
                .collect::<Vec<_>>()
        },
        |&p| u64::from(informed_pathfinding::algorithms::common::manhattan(p, goal)),
        |&p| p == goal,
    )
    .map(|(_, cost)| cost)
}

#[test]
fn golden_a_star_on_default_map() {
    let grid: Grid = DEFAULT_MAP.parse().unwrap();
    let (start, goal) = endpoints(&grid);
    let outcome = AStar::new().search(&grid, start, goal).unwrap();

    let path = outcome.path.expect("default map has a path");
    assert_eq!(
        path,
        vec![
            pos(0, 0),
            pos(1, 0),
            pos(2, 0),
            pos(2, 1),
            pos(3, 1),
            pos(4, 1),
            pos(4, 2),
            pos(4, 3),
            pos(4, 4),
            pos(4, 5),
            pos(4, 6),
        ]
    );
    assert_eq!(outcome.nodes_expanded, 20);
    assert_eq!(path_cost(&grid, &path).unwrap(), 22);

    assert_eq!(
        grid.render_with_path(&path),
        "S 1 2 3 # 5 6\n\
         * # 3 # 6 # 7\n\
         * * 3 4 5 6 8\n\
         # * # # 6 # 7\n\
         3 * * * * * G"
    );
}

#[test]
fn golden_gbfs_on_default_map() {
    let grid: Grid = DEFAULT_MAP.parse().unwrap();
    let (start, goal) = endpoints(&grid);
    let outcome = Gbfs::new().search(&grid, start, goal).unwrap();

    let path = outcome.path.expect("default map has a path");
    assert_eq!(
        path,
        vec![
            pos(0, 0),
            pos(0, 1),
            pos(0, 2),
            pos(1, 2),
            pos(2, 2),
            pos(2, 3),
            pos(2, 4),
            pos(2, 5),
            pos(2, 6),
            pos(3, 6),
            pos(4, 6),
        ]
    );
    assert_eq!(outcome.nodes_expanded, 12);
    assert_eq!(path_cost(&grid, &path).unwrap(), 40);

    assert_eq!(
        grid.render_with_path(&path),
        "S * * 3 # 5 6\n\
         1 # * # 6 # 7\n\
         2 2 * * * * *\n\
         # 4 # # 6 # *\n\
         3 2 1 2 3 4 G"
    );
}

#[test]
fn a_star_matches_the_oracle_on_default_map() {
    let grid: Grid = DEFAULT_MAP.parse().unwrap();
    let (start, goal) = endpoints(&grid);
    let outcome = AStar::new().search(&grid, start, goal).unwrap();
    let cost = path_cost(&grid, &outcome.path.unwrap()).unwrap();
    assert_eq!(Some(cost), oracle_cost(&grid, start, goal));
}

#[test]
fn a_star_never_costs_more_than_gbfs() {
    for seed in 0..20u64 {
        let grid = Grid::generate(12, 30, seed);
        let (start, goal) = endpoints(&grid);

        let astar = AStar::new().search(&grid, start, goal).unwrap();
        let gbfs = Gbfs::new().search(&grid, start, goal).unwrap();

        // Both agree on reachability.
        assert_eq!(astar.path.is_some(), gbfs.path.is_some(), "seed {}", seed);

        if let (Some(a), Some(g)) = (&astar.path, &gbfs.path) {
            let a_cost = path_cost(&grid, a).unwrap();
            let g_cost = path_cost(&grid, g).unwrap();
            assert!(a_cost <= g_cost, "seed {}: {} > {}", seed, a_cost, g_cost);
            assert_eq!(Some(a_cost), oracle_cost(&grid, start, goal), "seed {}", seed);
        } else {
            assert_eq!(oracle_cost(&grid, start, goal), None, "seed {}", seed);
        }
    }
}

#[test]
fn paths_are_valid_and_expansion_counts_bounded() {
    for seed in 0..20u64 {
        let grid = Grid::generate(10, 20, seed);
        let (start, goal) = endpoints(&grid);

        for algorithm in [&AStar::new() as &dyn SearchAlgorithm, &Gbfs::new()] {
            let outcome = algorithm.search(&grid, start, goal).unwrap();
            assert!(outcome.nodes_expanded >= 1);
            if let Some(path) = &outcome.path {
                assert_valid_path(path, start, goal);
            } else {
                // An exhausted frontier pops each reachable cell at least
                // once and never pops more entries than were pushed.
                assert!(outcome.nodes_expanded <= grid.traversable_count() * 4);
            }
        }
    }
}

#[test]
fn both_algorithms_are_deterministic_across_runs() {
    let grid = Grid::generate(12, 30, 7);
    let (start, goal) = endpoints(&grid);

    let a1 = AStar::new().search(&grid, start, goal).unwrap();
    let a2 = AStar::new().search(&grid, start, goal).unwrap();
    assert_eq!(a1, a2);

    let g1 = Gbfs::new().search(&grid, start, goal).unwrap();
    let g2 = Gbfs::new().search(&grid, start, goal).unwrap();
    assert_eq!(g1, g2);
}

#[test]
fn successful_expansion_count_stays_within_traversable_cells() {
    let grid: Grid = DEFAULT_MAP.parse().unwrap();
    let (start, goal) = endpoints(&grid);

    for algorithm in [&AStar::new() as &dyn SearchAlgorithm, &Gbfs::new()] {
        let SearchOutcome { nodes_expanded, .. } =
            algorithm.search(&grid, start, goal).unwrap();
        assert!(nodes_expanded >= 1);
        assert!(nodes_expanded <= grid.traversable_count());
    }
}
