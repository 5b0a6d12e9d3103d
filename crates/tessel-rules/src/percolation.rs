//! Site percolation.

use tessel_core::{Metadata, SimulationError, State};
use tessel_rule::{CellContext, ConfiguredRule, Rule, Transition};

/// Fluid spreading through open sites.
///
/// An open site next to a full site fills; blocked and full sites never
/// change.
#[derive(Debug, Clone, Copy, Default)]
pub struct Percolation;

impl Percolation {
    /// Site fluid cannot enter.
    pub const BLOCKED: State = 0;
    /// Empty site fluid can enter.
    pub const OPEN: State = 1;
    /// Site holding fluid.
    pub const FULL: State = 2;
}

impl Rule for Percolation {
    fn name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn default_state(&self) -> State {
        Self::BLOCKED
    }

    fn accepts(&self, state: State) -> bool {
        (Self::BLOCKED..=Self::FULL).contains(&state)
    }

    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
        if ctx.state() == Self::OPEN && ctx.count_state(Self::FULL) > 0 {
            Transition::to(Self::FULL)
        } else {
            Transition::to(ctx.state())
        }
    }
}

impl ConfiguredRule for Percolation {
    const TYPE_NAME: &'static str = "Percolation";
    const REQUIRED_KEYS: &'static [&'static str] = &[];

    fn from_metadata(_metadata: &Metadata) -> Result<Self, SimulationError> {
        Ok(Self)
    }
}
