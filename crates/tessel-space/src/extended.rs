//! Extended Moore neighbourhood: every cell within Chebyshev radius `r`.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::pattern::NeighborhoodPattern;

/// All cells within Chebyshev distance `radius`, excluding the centre.
///
/// A radius of 1 covers the same cells as [`Moore`](crate::Moore); the two
/// are built independently and only the offset order differs. The offset
/// table has `(2r + 1)² − 1` entries, generated row by row from the
/// top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedMoore {
    radius: u32,
    edge: EdgeBehavior,
    offsets: Vec<(i32, i32)>,
}

impl ExtendedMoore {
    /// Largest accepted radius.
    pub const MAX_RADIUS: u32 = 8;

    /// Create an extended pattern.
    ///
    /// Returns `Err(SpaceError::InvalidRadius)` if `radius` is zero or
    /// exceeds [`MAX_RADIUS`](Self::MAX_RADIUS).
    pub fn new(radius: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if radius == 0 || radius > Self::MAX_RADIUS {
            return Err(SpaceError::InvalidRadius {
                radius,
                max: Self::MAX_RADIUS,
            });
        }
        let r = radius as i32;
        let offsets = (-r..=r)
            .flat_map(|dr| (-r..=r).map(move |dc| (dr, dc)))
            .filter(|&off| off != (0, 0))
            .collect();
        Ok(Self {
            radius,
            edge,
            offsets,
        })
    }

    /// The Chebyshev radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }
}

impl NeighborhoodPattern for ExtendedMoore {
    fn name(&self) -> &str {
        "ExtendedMoore"
    }

    fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }
}
