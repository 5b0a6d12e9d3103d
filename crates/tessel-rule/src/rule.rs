//! The [`Rule`] and [`ConfiguredRule`] traits.

use std::fmt;

use tessel_core::{Metadata, SimulationError, State};

use crate::context::CellContext;
use crate::transition::Transition;

/// A local transition function applied to every cell once per generation.
///
/// # Contract
///
/// - `transition()` depends only on the [`CellContext`]: the cell's current
///   state and attributes and its current-generation neighbours. It has no
///   side effects.
/// - Neighbour order carries no meaning.
/// - Randomness comes from [`CellContext::rng`], which is seeded per cell,
///   so results do not depend on the order cells are visited in.
///
/// # Object safety
///
/// This trait is object-safe; simulations store rules as `Box<dyn Rule>`.
///
/// # Examples
///
/// A rule that inverts a binary cell:
///
/// ```
/// use tessel_rule::{CellContext, Rule, Transition};
///
/// #[derive(Debug)]
/// struct Invert;
///
/// impl Rule for Invert {
///     fn name(&self) -> &str { "Invert" }
///     fn default_state(&self) -> i32 { 0 }
///     fn accepts(&self, state: i32) -> bool { state == 0 || state == 1 }
///     fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
///         Transition::to(1 - ctx.state())
///     }
/// }
///
/// assert!(Invert.accepts(1));
/// assert!(!Invert.accepts(2));
/// ```
pub trait Rule: fmt::Debug + Send + 'static {
    /// Human-readable name for logs and error messages.
    fn name(&self) -> &str;

    /// Baseline state: fills unwritten next-generation slots and
    /// unspecified cells.
    fn default_state(&self) -> State;

    /// Whether `state` is a code this rule understands.
    fn accepts(&self, state: State) -> bool;

    /// Compute the next-generation value of one cell.
    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition;
}

/// A rule that can be built from configuration metadata.
///
/// Implementors are registered by type name in the engine's registry.
pub trait ConfiguredRule: Rule + Sized {
    /// Registry key (the `Type` metadata value).
    const TYPE_NAME: &'static str;

    /// Metadata keys that must be present for [`from_metadata`](Self::from_metadata)
    /// to succeed.
    const REQUIRED_KEYS: &'static [&'static str];

    /// Parse rule configuration. Absent required keys yield
    /// `SimulationError::MissingArgument`.
    fn from_metadata(metadata: &Metadata) -> Result<Self, SimulationError>;
}
