//! Pattern behaviour seen through a full `Simulation`, including repeated
//! neighbours on wrapping grids smaller than the pattern.

use tessel_engine::Simulation;
use tessel_space::{EdgeBehavior, ExtendedMoore, Moore, NeighborhoodPattern};
use tessel_test_utils::fixtures::NeighbourSumRule;
use tessel_test_utils::grid_from_art;

fn neighbour_sum(art: &str, pattern: Box<dyn NeighborhoodPattern>) -> Vec<Vec<i32>> {
    let mut sim = Simulation::new(
        "NeighbourSum",
        grid_from_art(art),
        pattern,
        Box::new(NeighbourSumRule),
        0,
    )
    .unwrap();
    sim.advance();
    sim.snapshot().to_rows()
}

#[test]
fn extended_radius_on_small_torus_counts_repeats() {
    // On a 3x3 torus a radius-2 window reaches each row and column offset
    // of ±1 twice, so the single live cell is counted 2 or 4 times.
    let rows = neighbour_sum(
        "1..
         ...
         ...",
        Box::new(ExtendedMoore::new(2, EdgeBehavior::Wrap).unwrap()),
    );
    assert_eq!(rows, vec![vec![0, 2, 2], vec![2, 0, 0], vec![2, 0, 0]]);
}

#[test]
fn moore_on_2x2_torus_sees_every_other_cell_repeatedly() {
    // All eight offsets resolve onto the three other cells.
    let rows = neighbour_sum("1.\n..", Box::new(Moore::new(EdgeBehavior::Wrap)));
    // (0,1) and (1,0) see (0,0) twice; (1,1) sees it four times.
    assert_eq!(rows, vec![vec![0, 2], vec![2, 0]]);
}

#[test]
fn bounded_extended_radius_never_repeats() {
    let rows = neighbour_sum(
        "1..
         ...
         ...",
        Box::new(ExtendedMoore::new(2, EdgeBehavior::Bounded).unwrap()),
    );
    assert_eq!(rows, vec![vec![0, 1, 1], vec![1, 1, 1], vec![1, 1, 1]]);
}
