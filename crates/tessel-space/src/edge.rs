//! Edge (boundary) behavior for neighbourhood patterns.

use std::fmt;
use std::str::FromStr;

use crate::error::SpaceError;

/// How a pattern resolves neighbour coordinates that fall off the grid.
///
/// # Examples
///
/// ```
/// use tessel_core::{GridDims, Position};
/// use tessel_space::{EdgeBehavior, Moore, NeighborhoodPattern};
///
/// let dims = GridDims::new(4, 4);
/// let corner = Position::new(0, 0);
///
/// // Bounded: a corner has 3 Moore neighbours, an interior cell 8.
/// let bounded = Moore::new(EdgeBehavior::Bounded);
/// assert_eq!(bounded.neighbours(dims, corner).len(), 3);
/// assert_eq!(bounded.neighbours(dims, Position::new(1, 1)).len(), 8);
///
/// // Wrap: every cell has exactly 8 neighbours (torus).
/// let wrap = Moore::new(EdgeBehavior::Wrap);
/// assert_eq!(wrap.neighbours(dims, corner).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range neighbours are omitted (fewer neighbours at edges).
    #[default]
    Bounded,
    /// Out-of-range neighbours wrap to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// Name used in metadata (`EdgePolicy=Bounded`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bounded => "Bounded",
            Self::Wrap => "Wrap",
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeBehavior {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Bounded" | "bounded" | "Finite" | "finite" => Ok(Self::Bounded),
            "Wrap" | "wrap" | "Toroidal" | "toroidal" => Ok(Self::Wrap),
            other => Err(SpaceError::UnknownEdgePolicy {
                name: other.to_string(),
            }),
        }
    }
}
