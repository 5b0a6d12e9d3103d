//! The core [`NeighborhoodPattern`] trait.

use std::fmt;

use smallvec::SmallVec;
use tessel_core::{GridDims, Position};

use crate::edge::EdgeBehavior;
use crate::lattice;

/// Neighbour positions returned by a pattern.
///
/// Inline capacity of 8 covers the 4- and 8-connected patterns without a
/// heap allocation; extended radii spill to the heap.
pub type Neighbours = SmallVec<[Position; 8]>;

/// Strategy selecting which cells count as adjacent to a given cell.
///
/// Patterns are configuration-only: they hold an offset table and an
/// [`EdgeBehavior`] and nothing that changes between calls. Variants differ
/// only in which relative offsets count as adjacent and how out-of-range
/// coordinates are resolved.
///
/// # Ordering
///
/// Rules treat neighbours as an unordered collection, but implementations
/// return them in offset-table order so results are reproducible.
///
/// # Thread Safety
///
/// `Send + Sync` is required because a simulation, together with its
/// pattern, is moved onto the scheduler's tick thread.
pub trait NeighborhoodPattern: fmt::Debug + Send + Sync + 'static {
    /// Human-readable name (`"Moore"`, `"VonNeumann"`, ...).
    fn name(&self) -> &str;

    /// How out-of-range coordinates are resolved.
    fn edge_behavior(&self) -> EdgeBehavior;

    /// Relative `(d_row, d_col)` offsets that count as adjacent. Never
    /// contains `(0, 0)`.
    fn offsets(&self) -> &[(i32, i32)];

    /// Neighbour positions of `pos` on a grid of size `dims`.
    ///
    /// Bounded patterns omit out-of-range offsets; wrapping patterns map
    /// them modulo the grid size, so on grids smaller than the pattern a
    /// position may appear more than once.
    fn neighbours(&self, dims: GridDims, pos: Position) -> Neighbours {
        lattice::apply_offsets(self.offsets(), dims, pos, self.edge_behavior())
    }

    /// Upper bound on the number of neighbours any cell can have.
    fn max_neighbours(&self) -> usize {
        self.offsets().len()
    }
}
