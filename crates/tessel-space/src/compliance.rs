//! Pattern trait compliance test helpers.
//!
//! These functions verify that a pattern satisfies the invariants required
//! by the trait contract. Reused across every pattern's test module.

use indexmap::IndexSet;
use tessel_core::{GridDims, Position};

use crate::edge::EdgeBehavior;
use crate::pattern::NeighborhoodPattern;

/// Every returned neighbour lies inside the grid.
pub fn assert_neighbours_in_bounds(pattern: &dyn NeighborhoodPattern, dims: GridDims) {
    for pos in dims.positions() {
        for nb in pattern.neighbours(dims, pos) {
            assert!(dims.contains(nb), "{nb} out of bounds for {dims} (from {pos})");
        }
    }
}

/// `b in N(a)` implies `a in N(b)`.
pub fn assert_neighbours_symmetric(pattern: &dyn NeighborhoodPattern, dims: GridDims) {
    for pos in dims.positions() {
        for nb in pattern.neighbours(dims, pos) {
            assert!(
                pattern.neighbours(dims, nb).contains(&pos),
                "neighbour symmetry violated: {nb} in N({pos}) but {pos} not in N({nb})"
            );
        }
    }
}

/// Two calls return the same sequence.
pub fn assert_neighbours_deterministic(pattern: &dyn NeighborhoodPattern, dims: GridDims) {
    for pos in dims.positions() {
        assert_eq!(pattern.neighbours(dims, pos), pattern.neighbours(dims, pos));
    }
}

/// Bounded patterns never return the cell itself or a duplicate.
pub fn assert_bounded_distinct(pattern: &dyn NeighborhoodPattern, dims: GridDims) {
    if pattern.edge_behavior() != EdgeBehavior::Bounded {
        return;
    }
    for pos in dims.positions() {
        let nbs = pattern.neighbours(dims, pos);
        let unique: IndexSet<Position> = nbs.iter().copied().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbours of {pos}");
        assert!(!unique.contains(&pos), "{pos} listed as its own neighbour");
    }
}

/// Wrapping patterns give every cell the full neighbour count.
pub fn assert_wrap_full_degree(pattern: &dyn NeighborhoodPattern, dims: GridDims) {
    if pattern.edge_behavior() != EdgeBehavior::Wrap {
        return;
    }
    for pos in dims.positions() {
        assert_eq!(pattern.neighbours(dims, pos).len(), pattern.max_neighbours());
    }
}

/// Run every compliance check.
pub fn run_full_compliance(pattern: &dyn NeighborhoodPattern, dims: GridDims) {
    assert_neighbours_in_bounds(pattern, dims);
    assert_neighbours_symmetric(pattern, dims);
    assert_neighbours_deterministic(pattern, dims);
    assert_bounded_distinct(pattern, dims);
    assert_wrap_full_degree(pattern, dims);
}
