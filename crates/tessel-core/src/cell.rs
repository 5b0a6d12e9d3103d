//! Cell positions, state codes, and grid dimensions.

use indexmap::IndexMap;
use std::fmt;

/// Integer state code of a cell.
///
/// The meaning of each code is defined by the rule that owns the grid
/// (e.g. `0 = dead, 1 = alive` for Game of Life).
pub type State = i32;

/// Rule-specific per-cell attributes carried across generations.
///
/// Keys are attribute names (`"age"`, `"energy"`, ...). Insertion order is
/// preserved so that debug output is stable.
pub type Attributes = IndexMap<String, i64>;

/// A `(row, col)` grid position.
///
/// Identity of a cell is positional: the same `Position` refers to the same
/// logical slot in both the current and the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based row index.
    pub row: u32,
    /// Zero-based column index.
    pub col: u32,
}

impl Position {
    /// Create a position from a row and column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Position {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Dimensions of a rectangular `rows × cols` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

impl GridDims {
    /// Largest accepted extent per axis.
    pub const MAX_DIM: u32 = 1 << 15;

    /// Create dimensions. Zero-sized axes are allowed here; `Grid`
    /// construction rejects them.
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major flat index of `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds. Out-of-bounds access is a caller
    /// bug, never a recoverable condition.
    pub fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        (pos.row as usize) * (self.cols as usize) + (pos.col as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn position_of(&self, index: usize) -> Position {
        debug_assert!(index < self.cell_count());
        let cols = self.cols as usize;
        Position::new((index / cols) as u32, (index % cols) as u32)
    }

    /// All positions in row-major canonical order:
    /// `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Position::new(r, c)))
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// One addressable grid slot: position, state code, and rule attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Where the cell lives.
    pub position: Position,
    /// Current state code.
    pub state: State,
    /// Rule-specific attributes (empty for most rules).
    pub attributes: Attributes,
}

impl Cell {
    /// A cell with the given state and no attributes.
    pub fn new(position: Position, state: State) -> Self {
        Self {
            position,
            state,
            attributes: Attributes::new(),
        }
    }

    /// Read an attribute, if present.
    pub fn attribute(&self, key: &str) -> Option<i64> {
        self.attributes.get(key).copied()
    }

    /// Reset this cell to `state` with no attributes, keeping its position.
    pub fn reset(&mut self, state: State) {
        self.state = state;
        self.attributes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn positions_are_row_major() {
        let dims = GridDims::new(2, 3);
        let all: Vec<_> = dims.positions().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(0, 1));
        assert_eq!(all[3], Position::new(1, 0));
        assert_eq!(all[5], Position::new(1, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_of_out_of_bounds_panics() {
        GridDims::new(2, 2).index_of(Position::new(2, 0));
    }

    #[test]
    fn cell_reset_clears_attributes() {
        let mut cell = Cell::new(Position::new(1, 1), 2);
        cell.attributes.insert("age".into(), 3);
        assert_eq!(cell.attribute("age"), Some(3));
        cell.reset(0);
        assert_eq!(cell.state, 0);
        assert!(cell.attributes.is_empty());
        assert_eq!(cell.position, Position::new(1, 1));
    }

    proptest! {
        #[test]
        fn index_round_trips(rows in 1u32..40, cols in 1u32..40, r in 0u32..40, c in 0u32..40) {
            let dims = GridDims::new(rows, cols);
            let pos = Position::new(r % rows, c % cols);
            prop_assert_eq!(dims.position_of(dims.index_of(pos)), pos);
        }

        #[test]
        fn positions_cover_every_cell(rows in 1u32..30, cols in 1u32..30) {
            let dims = GridDims::new(rows, cols);
            let indices: Vec<usize> = dims.positions().map(|p| dims.index_of(p)).collect();
            prop_assert_eq!(indices, (0..dims.cell_count()).collect::<Vec<_>>());
        }
    }
}
