//! Simulation engine for Tessel cellular automata.
//!
//! [`Simulation`] composes a grid, a neighbourhood pattern and a rule and
//! advances them one generation at a time. [`Registry`] maps configured
//! type names to rule constructors. [`TickScheduler`] drives a simulation
//! on a background thread at a configurable period and publishes each
//! generation into a [`SnapshotRing`]. The [`loader`] module reads and
//! writes the `.sim` / CSV file pair.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod loader;
pub mod metrics;
pub mod registry;
pub mod ring;
pub mod scheduler;
pub mod simulation;
mod tick_thread;

pub use config::{ConfigError, SchedulerConfig};
pub use loader::LoadError;
pub use metrics::{AdvanceMetrics, SchedulerStats};
pub use registry::{Registry, RegistryEntry};
pub use ring::SnapshotRing;
pub use scheduler::{SchedulerError, SchedulerState, StopReport, TickScheduler};
pub use simulation::Simulation;
