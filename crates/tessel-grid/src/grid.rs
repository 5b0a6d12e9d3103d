//! The double-buffered [`Grid`].

use std::mem;

use tessel_core::{Attributes, Cell, Generation, GridDims, Position, State};
use tessel_space::NeighborhoodPattern;

use crate::error::GridError;
use crate::snapshot::GridSnapshot;
use crate::view::{CurrentView, NextWriter};

/// Fixed-size `rows × cols` grid holding a current and a next generation.
///
/// # Buffer roles
///
/// ```text
/// current: Vec<Cell>  ←─── read by rules, copied into snapshots
/// next:    Vec<Cell>  ←─── written during a pass, promoted on advance
/// ```
///
/// Both buffers always hold exactly one [`Cell`] per in-bounds position,
/// stored row-major. Dimensions never change after construction.
///
/// # Examples
///
/// ```
/// use tessel_core::Position;
/// use tessel_grid::Grid;
///
/// let mut grid = Grid::from_rows(vec![vec![0, 1], vec![1, 0]], 0).unwrap();
/// grid.write_next(Position::new(0, 0), 1);
/// assert_eq!(grid.current_state(Position::new(0, 0)), 0);
///
/// grid.advance_generation();
/// assert_eq!(grid.current_state(Position::new(0, 0)), 1);
/// // Unwritten positions fall back to the baseline.
/// assert_eq!(grid.current_state(Position::new(0, 1)), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    dims: GridDims,
    baseline: State,
    generation: Generation,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// A grid with every cell in `baseline`.
    pub fn new(dims: GridDims, baseline: State) -> Result<Self, GridError> {
        check_dims(dims)?;
        Ok(Self::build(dims, baseline, vec![baseline; dims.cell_count()]))
    }

    /// A grid from nested rows of state codes.
    ///
    /// Returns `Err(GridError::Empty)` for no rows or empty rows and
    /// `Err(GridError::Ragged)` if row lengths differ.
    pub fn from_rows(rows: Vec<Vec<State>>, baseline: State) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(GridError::Ragged {
                row,
                expected,
                found: r.len(),
            });
        }
        let dims = GridDims::new(axis(rows.len()), axis(expected));
        check_dims(dims)?;
        let states = rows.into_iter().flatten().collect();
        Ok(Self::build(dims, baseline, states))
    }

    /// A grid from row-major states.
    pub fn from_states(
        dims: GridDims,
        states: Vec<State>,
        baseline: State,
    ) -> Result<Self, GridError> {
        check_dims(dims)?;
        if states.len() != dims.cell_count() {
            return Err(GridError::DimensionMismatch {
                expected: dims.cell_count(),
                found: states.len(),
            });
        }
        Ok(Self::build(dims, baseline, states))
    }

    fn build(dims: GridDims, baseline: State, states: Vec<State>) -> Self {
        let current = dims
            .positions()
            .zip(states)
            .map(|(pos, s)| Cell::new(pos, s))
            .collect();
        let next = dims.positions().map(|pos| Cell::new(pos, baseline)).collect();
        Self {
            dims,
            baseline,
            generation: Generation::default(),
            current,
            next,
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.dims.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.dims.cols
    }

    /// State the next buffer is reset to after each swap.
    pub fn baseline(&self) -> State {
        self.baseline
    }

    /// Generations promoted since construction.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Current state at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn current_state(&self, pos: Position) -> State {
        self.cell(pos).state
    }

    /// Current cell at `pos`. Panics if out of bounds.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.current[self.dims.index_of(pos)]
    }

    /// Current cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.current.iter()
    }

    /// Current cells adjacent to `pos` under `pattern`. Computed afresh on
    /// every call.
    pub fn neighbours(&self, pos: Position, pattern: &dyn NeighborhoodPattern) -> Vec<&Cell> {
        self.current_view().neighbours(pos, pattern)
    }

    /// Number of current cells in `state`.
    pub fn population(&self, state: State) -> usize {
        self.current.iter().filter(|c| c.state == state).count()
    }

    /// Read-only view of the current generation.
    pub fn current_view(&self) -> CurrentView<'_> {
        CurrentView::new(self.dims, self.generation, &self.current)
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Write `state` (no attributes) into the next buffer at `pos`.
    pub fn write_next(&mut self, pos: Position, state: State) {
        let idx = self.dims.index_of(pos);
        self.next[idx].reset(state);
    }

    /// Write `state` and `attributes` into the next buffer at `pos`.
    pub fn write_next_cell(&mut self, pos: Position, state: State, attributes: Attributes) {
        let idx = self.dims.index_of(pos);
        let cell = &mut self.next[idx];
        cell.state = state;
        cell.attributes = attributes;
    }

    /// Overwrite a current-generation cell between passes, clearing its
    /// attributes.
    pub fn set_current(&mut self, pos: Position, state: State) {
        let idx = self.dims.index_of(pos);
        self.current[idx].reset(state);
    }

    /// Borrow the current buffer for reading and the next buffer for
    /// writing at the same time.
    pub fn split_pass(&mut self) -> (CurrentView<'_>, NextWriter<'_>) {
        (
            CurrentView::new(self.dims, self.generation, &self.current),
            NextWriter::new(self.dims, &mut self.next),
        )
    }

    /// Promote the next buffer to current in a single swap, reset the new
    /// next buffer to the baseline, and bump the generation.
    pub fn advance_generation(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
        let baseline = self.baseline;
        for cell in &mut self.next {
            cell.reset(baseline);
        }
        self.generation = self.generation.next();
    }

    /// Independent copy of the current states.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(
            self.dims,
            self.generation,
            self.current.iter().map(|c| c.state).collect(),
        )
    }
}

fn axis(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn check_dims(dims: GridDims) -> Result<(), GridError> {
    if dims.is_empty() {
        return Err(GridError::Empty);
    }
    if dims.rows > GridDims::MAX_DIM || dims.cols > GridDims::MAX_DIM {
        return Err(GridError::TooLarge { dims });
    }
    Ok(())
}
