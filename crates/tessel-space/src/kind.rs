//! Metadata-driven pattern construction.

use std::fmt;
use std::str::FromStr;

use tessel_core::{Metadata, SimulationError};

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::extended::ExtendedMoore;
use crate::moore::Moore;
use crate::pattern::NeighborhoodPattern;
use crate::von_neumann::VonNeumann;

/// Which pattern family to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// 4-connected.
    VonNeumann,
    /// 8-connected.
    #[default]
    Moore,
    /// Every cell within a Chebyshev radius.
    ExtendedMoore,
}

impl PatternKind {
    /// Metadata key selecting the pattern family.
    pub const NEIGHBORHOOD_KEY: &'static str = "Neighborhood";
    /// Metadata key selecting the edge behavior.
    pub const EDGE_POLICY_KEY: &'static str = "EdgePolicy";
    /// Metadata key for the extended radius.
    pub const RADIUS_KEY: &'static str = "Radius";

    /// Name used in metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VonNeumann => "VonNeumann",
            Self::Moore => "Moore",
            Self::ExtendedMoore => "ExtendedMoore",
        }
    }

    /// Build a pattern of this kind. `radius` is only consulted by
    /// [`PatternKind::ExtendedMoore`].
    pub fn build(
        self,
        edge: EdgeBehavior,
        radius: u32,
    ) -> Result<Box<dyn NeighborhoodPattern>, SpaceError> {
        Ok(match self {
            Self::VonNeumann => Box::new(VonNeumann::new(edge)),
            Self::Moore => Box::new(Moore::new(edge)),
            Self::ExtendedMoore => Box::new(ExtendedMoore::new(radius, edge)?),
        })
    }

    /// Build the pattern described by the optional `Neighborhood`,
    /// `EdgePolicy` and `Radius` keys. Absent keys default to a bounded
    /// Moore pattern of radius 1.
    pub fn from_metadata(
        metadata: &Metadata,
    ) -> Result<Box<dyn NeighborhoodPattern>, SimulationError> {
        let kind = match metadata.get(Self::NEIGHBORHOOD_KEY) {
            Some(raw) => raw.parse::<PatternKind>()?,
            None => PatternKind::default(),
        };
        let edge = match metadata.get(Self::EDGE_POLICY_KEY) {
            Some(raw) => raw.parse::<EdgeBehavior>()?,
            None => EdgeBehavior::default(),
        };
        let radius: u32 = metadata.parse_or(Self::RADIUS_KEY, 1)?;
        Ok(kind.build(edge, radius)?)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "VonNeumann" | "vonneumann" | "Square4" | "4" => Ok(Self::VonNeumann),
            "Moore" | "moore" | "Square8" | "8" => Ok(Self::Moore),
            "ExtendedMoore" | "extendedmoore" | "Extended" => Ok(Self::ExtendedMoore),
            other => Err(SpaceError::UnknownPattern {
                name: other.to_string(),
            }),
        }
    }
}
