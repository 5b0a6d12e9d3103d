//! Owned point-in-time copies of a grid's current generation.

use tessel_core::{Generation, GridDims, Position, State};

/// Independent copy of the current-generation states.
///
/// A snapshot never aliases grid storage: advancing or editing the grid
/// afterwards leaves it unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    dims: GridDims,
    generation: Generation,
    states: Vec<State>,
}

impl GridSnapshot {
    pub(crate) fn new(dims: GridDims, generation: Generation, states: Vec<State>) -> Self {
        debug_assert_eq!(states.len(), dims.cell_count());
        Self {
            dims,
            generation,
            states,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.dims.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.dims.cols
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Generation the snapshot was taken at.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// State at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn get(&self, pos: Position) -> State {
        self.states[self.dims.index_of(pos)]
    }

    /// Row-major flat view of every state.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Copy into a `rows × cols` nested vector.
    pub fn to_rows(&self) -> Vec<Vec<State>> {
        self.states
            .chunks(self.dims.cols as usize)
            .map(<[State]>::to_vec)
            .collect()
    }

    /// Number of cells in `state`.
    pub fn population(&self, state: State) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }
}
