//! Error types for pattern construction.

use std::fmt;

use tessel_core::SimulationError;

/// Errors arising from neighbourhood pattern construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// An extended radius outside `1..=MAX_RADIUS`.
    InvalidRadius {
        /// The rejected radius.
        radius: u32,
        /// The largest accepted radius.
        max: u32,
    },
    /// A pattern name that no variant answers to.
    UnknownPattern {
        /// The rejected name.
        name: String,
    },
    /// An edge policy name that is neither bounded nor wrapping.
    UnknownEdgePolicy {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius, max } => {
                write!(f, "radius {radius} outside 1..={max}")
            }
            Self::UnknownPattern { name } => write!(f, "unknown neighbourhood pattern '{name}'"),
            Self::UnknownEdgePolicy { name } => write!(f, "unknown edge policy '{name}'"),
        }
    }
}

impl std::error::Error for SpaceError {}

impl From<SpaceError> for SimulationError {
    fn from(e: SpaceError) -> Self {
        let (key, value) = match &e {
            SpaceError::InvalidRadius { radius, .. } => ("Radius", radius.to_string()),
            SpaceError::UnknownPattern { name } => ("Neighborhood", name.clone()),
            SpaceError::UnknownEdgePolicy { name } => ("EdgePolicy", name.clone()),
        };
        SimulationError::InvalidArgument {
            key: key.to_string(),
            value,
            reason: e.to_string(),
        }
    }
}
