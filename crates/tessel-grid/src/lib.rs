//! Double-buffered cell grid for Tessel simulations.
//!
//! [`Grid`] owns two generations of cells. Readers see the current
//! generation; an update pass writes the next generation through a
//! [`NextWriter`]; [`Grid::advance_generation`] promotes it in one swap.
//! [`GridSnapshot`] is an owned copy of the current states for renderers
//! and savers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod snapshot;
pub mod view;

pub use error::GridError;
pub use grid::Grid;
pub use snapshot::GridSnapshot;
pub use view::{CurrentView, NextWriter};
