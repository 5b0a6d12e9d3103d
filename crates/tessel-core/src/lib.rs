//! Core types for the Tessel cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: cell positions
//! and state codes, grid dimensions, the generation counter, the
//! configuration [`Metadata`] map, and [`SimulationError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod metadata;

pub use cell::{Attributes, Cell, GridDims, Position, State};
pub use error::SimulationError;
pub use id::Generation;
pub use metadata::Metadata;
