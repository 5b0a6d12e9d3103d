//! Split borrows of a grid used during an update pass.
//!
//! [`Grid::split_pass`](crate::Grid::split_pass) hands out a [`CurrentView`]
//! over the current buffer and a [`NextWriter`] over the next buffer. The
//! view has no path to the next buffer, so anything holding only a view
//! cannot observe writes made earlier in the same pass.

use tessel_core::{Attributes, Cell, Generation, GridDims, Position, State};
use tessel_space::NeighborhoodPattern;

/// Read-only access to the current generation.
#[derive(Clone, Copy, Debug)]
pub struct CurrentView<'a> {
    dims: GridDims,
    generation: Generation,
    cells: &'a [Cell],
}

impl<'a> CurrentView<'a> {
    pub(crate) fn new(dims: GridDims, generation: Generation, cells: &'a [Cell]) -> Self {
        Self {
            dims,
            generation,
            cells,
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The generation being read.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Current cell at `pos`. Panics if out of bounds.
    pub fn cell(&self, pos: Position) -> &'a Cell {
        &self.cells[self.dims.index_of(pos)]
    }

    /// Current state at `pos`. Panics if out of bounds.
    pub fn state(&self, pos: Position) -> State {
        self.cell(pos).state
    }

    /// Current cells adjacent to `pos` under `pattern`, freshly computed.
    pub fn neighbours(&self, pos: Position, pattern: &dyn NeighborhoodPattern) -> Vec<&'a Cell> {
        pattern
            .neighbours(self.dims, pos)
            .into_iter()
            .map(|nb| self.cell(nb))
            .collect()
    }
}

/// Write-only access to the next generation.
#[derive(Debug)]
pub struct NextWriter<'a> {
    dims: GridDims,
    cells: &'a mut [Cell],
    written: usize,
}

impl<'a> NextWriter<'a> {
    pub(crate) fn new(dims: GridDims, cells: &'a mut [Cell]) -> Self {
        Self {
            dims,
            cells,
            written: 0,
        }
    }

    /// Write `state` with no attributes at `pos`. Panics if out of bounds.
    pub fn write(&mut self, pos: Position, state: State) {
        let idx = self.dims.index_of(pos);
        self.cells[idx].reset(state);
        self.written += 1;
    }

    /// Write `state` and `attributes` at `pos`. Panics if out of bounds.
    pub fn write_cell(&mut self, pos: Position, state: State, attributes: Attributes) {
        let idx = self.dims.index_of(pos);
        let cell = &mut self.cells[idx];
        cell.state = state;
        cell.attributes = attributes;
        self.written += 1;
    }

    /// Number of writes made through this writer.
    pub fn written(&self) -> usize {
        self.written
    }
}
