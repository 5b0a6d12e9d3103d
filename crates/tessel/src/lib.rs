//! Tessel: a double-buffered cellular automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessel sub-crates. For most users, adding `tessel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // A rule of our own: a cell copies the majority of its neighbours.
//! #[derive(Debug)]
//! struct Majority;
//!
//! impl Rule for Majority {
//!     fn name(&self) -> &str { "Majority" }
//!     fn default_state(&self) -> State { 0 }
//!     fn accepts(&self, state: State) -> bool { state == 0 || state == 1 }
//!     fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
//!         let ones = ctx.count_state(1);
//!         let total = ctx.neighbours().len();
//!         Transition::to(if 2 * ones > total { 1 } else { 0 })
//!     }
//! }
//!
//! let grid = Grid::from_rows(vec![vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 0]], 0).unwrap();
//! let mut sim = Simulation::new(
//!     "Majority",
//!     grid,
//!     Box::new(Moore::new(EdgeBehavior::Bounded)),
//!     Box::new(Majority),
//!     0,
//! )
//! .unwrap();
//! sim.advance();
//! assert_eq!(sim.generation(), Generation(1));
//!
//! // Or build a registered rule from metadata.
//! let meta: Metadata = [("Type", "GameOfLife"), ("EdgePolicy", "Wrap")]
//!     .into_iter()
//!     .collect();
//! let mut life = Registry::standard().load(&meta, vec![vec![0, 1, 0]; 3]).unwrap();
//! life.advance();
//! assert_eq!(life.snapshot().to_rows()[1], vec![1, 1, 1]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Cells, positions, metadata, `SimulationError` |
//! | [`space`] | `tessel-space` | Neighbourhood patterns and edge behaviour |
//! | [`grid`] | `tessel-grid` | The double-buffered `Grid` and `GridSnapshot` |
//! | [`rule`] | `tessel-rule` | The `Rule` trait and `CellContext` |
//! | [`rules`] | `tessel-rules` | Game of Life, Segregation, Fire, Wa-Tor, ... |
//! | [`engine`] | `tessel-engine` | `Simulation`, `Registry`, `TickScheduler`, loader |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`tessel-core`).
///
/// [`types::Cell`], [`types::Position`], [`types::Metadata`] and
/// [`types::SimulationError`].
pub use tessel_core as types;

/// Neighbourhood patterns (`tessel-space`).
///
/// The [`space::NeighborhoodPattern`] trait and its implementations
/// [`space::VonNeumann`], [`space::Moore`] and [`space::ExtendedMoore`].
pub use tessel_space as space;

/// The double-buffered grid (`tessel-grid`).
pub use tessel_grid as grid;

/// The rule contract (`tessel-rule`).
///
/// Implement [`rule::Rule`] for a new automaton, and
/// [`rule::ConfiguredRule`] to make it buildable from metadata.
pub use tessel_rule as rule;

/// Standard rule implementations (`tessel-rules`).
pub use tessel_rules as rules;

/// Simulations, the registry, the tick scheduler and file loading
/// (`tessel-engine`).
pub use tessel_engine as engine;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_core::{Cell, Generation, GridDims, Metadata, Position, SimulationError, State};

    // Space
    pub use tessel_space::{EdgeBehavior, Moore, NeighborhoodPattern, PatternKind, VonNeumann};

    // Grid
    pub use tessel_grid::{Grid, GridSnapshot};

    // Rules
    pub use tessel_rule::{CellContext, ConfiguredRule, Rule, Transition};

    // Engine
    pub use tessel_engine::{
        Registry, SchedulerConfig, SchedulerState, Simulation, TickScheduler,
    };
}
