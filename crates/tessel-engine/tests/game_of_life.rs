//! Grid-level behaviour of the Game of Life rule through a full
//! `Simulation`: neighbour counts, the double buffer and known patterns.

use tessel_core::{Generation, GridDims, Position};
use tessel_engine::Simulation;
use tessel_grid::Grid;
use tessel_rules::GameOfLife;
use tessel_space::{EdgeBehavior, Moore, NeighborhoodPattern};
use tessel_test_utils::{grid_from_art, grid_to_art};

fn life(grid: Grid, edge: EdgeBehavior) -> Simulation {
    Simulation::new(
        "GameOfLife",
        grid,
        Box::new(Moore::new(edge)),
        Box::new(GameOfLife),
        0,
    )
    .unwrap()
}

fn live_neighbours(grid: &Grid, pattern: &dyn NeighborhoodPattern, pos: Position) -> usize {
    grid.neighbours(pos, pattern)
        .iter()
        .filter(|c| c.state == GameOfLife::ALIVE)
        .count()
}

#[test]
fn bounded_3x3_neighbour_counts() {
    let grid = grid_from_art(
        "###
         #.#
         ###",
    );
    let moore = Moore::new(EdgeBehavior::Bounded);
    assert_eq!(live_neighbours(&grid, &moore, Position::new(1, 1)), 8);
    assert_eq!(live_neighbours(&grid, &moore, Position::new(0, 0)), 2);
    assert_eq!(grid.neighbours(Position::new(0, 0), &moore).len(), 3);
    assert_eq!(grid.neighbours(Position::new(0, 1), &moore).len(), 5);
}

#[test]
fn cross_becomes_ring() {
    let mut sim = life(
        grid_from_art(
            ".#.
             ###
             .#.",
        ),
        EdgeBehavior::Bounded,
    );
    sim.advance();
    assert_eq!(
        sim.snapshot().to_rows(),
        vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]
    );
}

#[test]
fn blinker_oscillates_with_period_two() {
    let start = ".....\n..1..\n..1..\n..1..\n.....";
    let mut sim = life(grid_from_art(start), EdgeBehavior::Bounded);

    sim.advance();
    assert_eq!(grid_to_art(sim.grid()), ".....\n.....\n.111.\n.....\n.....");
    sim.advance();
    assert_eq!(grid_to_art(sim.grid()), start);
    assert_eq!(sim.generation(), Generation(2));
}

#[test]
fn glider_translates_diagonally_on_torus() {
    let mut sim = life(
        grid_from_art(
            ".#....
             ..#...
             ###...
             ......
             ......
             ......",
        ),
        EdgeBehavior::Wrap,
    );
    let before = sim.snapshot();
    sim.advance_by(4);
    let after = sim.snapshot();

    assert_eq!(after.population(GameOfLife::ALIVE), 5);
    for pos in before.dims().positions() {
        let shifted = Position::new((pos.row + 1) % 6, (pos.col + 1) % 6);
        assert_eq!(before.get(pos), after.get(shifted), "mismatch at {pos}");
    }
}

#[test]
fn empty_grid_stays_empty() {
    let mut sim = life(Grid::new(GridDims::new(4, 4), 0).unwrap(), EdgeBehavior::Wrap);
    sim.advance_by(3);
    assert_eq!(sim.snapshot().population(GameOfLife::ALIVE), 0);
}

#[test]
fn snapshot_taken_before_advance_is_unchanged() {
    let mut sim = life(grid_from_art("...\n###\n..."), EdgeBehavior::Bounded);
    let snap = sim.snapshot();
    sim.advance();
    assert_eq!(snap.to_rows(), vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]);
    assert_eq!(snap.generation(), Generation(0));
    assert_ne!(sim.snapshot().to_rows(), snap.to_rows());
}
