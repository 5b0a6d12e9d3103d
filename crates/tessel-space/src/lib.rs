//! Neighbourhood patterns for Tessel grids.
//!
//! This crate defines the [`NeighborhoodPattern`] trait, the strategy through
//! which a grid decides which cells count as adjacent, along with the
//! concrete patterns and the [`EdgeBehavior`] that resolves out-of-range
//! coordinates.
//!
//! # Patterns
//!
//! - [`VonNeumann`]: 4-connected (N, S, W, E)
//! - [`Moore`]: 8-connected (cardinal + diagonal)
//! - [`ExtendedMoore`]: every cell within Chebyshev radius `r`
//!
//! Patterns are independent implementations of one trait; none derives
//! its offsets from another. [`PatternKind`] builds one from metadata.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod extended;
pub mod kind;
pub(crate) mod lattice;
pub mod moore;
pub mod pattern;
pub mod von_neumann;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use extended::ExtendedMoore;
pub use kind::PatternKind;
pub use moore::Moore;
pub use pattern::{NeighborhoodPattern, Neighbours};
pub use von_neumann::VonNeumann;
