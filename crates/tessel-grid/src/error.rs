//! Grid construction errors.

use std::error::Error;
use std::fmt;

use tessel_core::{GridDims, SimulationError};

/// Errors from building a [`Grid`](crate::Grid) out of external input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns.
    Empty,
    /// A row whose length differs from the first row.
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The number of states does not match `rows × cols`.
    DimensionMismatch {
        /// Cell count implied by the dimensions.
        expected: usize,
        /// Number of states supplied.
        found: usize,
    },
    /// An axis exceeds [`GridDims::MAX_DIM`].
    TooLarge {
        /// The rejected dimensions.
        dims: GridDims,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "expected {expected} cell states, got {found}")
            }
            Self::TooLarge { dims } => write!(
                f,
                "grid {dims} exceeds the maximum extent of {} per axis",
                GridDims::MAX_DIM
            ),
        }
    }
}

impl Error for GridError {}

impl From<GridError> for SimulationError {
    fn from(e: GridError) -> Self {
        SimulationError::MalformedInput {
            reason: e.to_string(),
        }
    }
}
