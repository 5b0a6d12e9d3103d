//! Per-cell transition rule contract for Tessel simulations.
//!
//! A [`Rule`] maps one cell and its current-generation neighbours to the
//! [`Transition`] written for that position in the next generation. Rules
//! see the grid only through a [`CellContext`], which carries references to
//! current-generation cells and nothing else.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod rule;
pub mod transition;

pub use context::CellContext;
pub use rule::{ConfiguredRule, Rule};
pub use transition::Transition;
