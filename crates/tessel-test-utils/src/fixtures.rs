//! Reusable rule fixtures.
//!
//! - [`ConstRule`]: writes a constant state everywhere.
//! - [`ToggleRule`]: flips between 0 and 1 every generation.
//! - [`CountingRule`]: counts invocations through a shared counter.
//! - [`NeighbourSumRule`]: state = number of nonzero neighbours (mod 4).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tessel_core::{Metadata, SimulationError, State};
use tessel_rule::{CellContext, ConfiguredRule, Rule, Transition};

/// Writes `value` to every cell. Accepts any state.
#[derive(Debug, Clone, Copy)]
pub struct ConstRule {
    pub value: State,
}

impl ConstRule {
    pub fn new(value: State) -> Self {
        Self { value }
    }
}

impl Rule for ConstRule {
    fn name(&self) -> &str {
        "Const"
    }

    fn default_state(&self) -> State {
        0
    }

    fn accepts(&self, _state: State) -> bool {
        true
    }

    fn transition(&self, _ctx: &mut CellContext<'_>) -> Transition {
        Transition::to(self.value)
    }
}

/// Flips 0 ↔ 1. Registered as `Toggle` with no required keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleRule;

impl Rule for ToggleRule {
    fn name(&self) -> &str {
        "Toggle"
    }

    fn default_state(&self) -> State {
        0
    }

    fn accepts(&self, state: State) -> bool {
        state == 0 || state == 1
    }

    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
        Transition::to(1 - ctx.state())
    }
}

impl ConfiguredRule for ToggleRule {
    const TYPE_NAME: &'static str = "Toggle";
    const REQUIRED_KEYS: &'static [&'static str] = &[];

    fn from_metadata(_metadata: &Metadata) -> Result<Self, SimulationError> {
        Ok(Self)
    }
}

/// Keeps every cell unchanged and counts how many transitions ran.
#[derive(Debug, Clone, Default)]
pub struct CountingRule {
    calls: Arc<AtomicUsize>,
}

impl CountingRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the counter; survives moving the rule into a
    /// simulation.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Rule for CountingRule {
    fn name(&self) -> &str {
        "Counting"
    }

    fn default_state(&self) -> State {
        0
    }

    fn accepts(&self, _state: State) -> bool {
        true
    }

    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Transition::keep(ctx.cell())
    }
}

/// Next state is the number of nonzero neighbours modulo 4.
///
/// Sensitive to every neighbour, so any read of a half-written next
/// generation shows up in the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighbourSumRule;

impl Rule for NeighbourSumRule {
    fn name(&self) -> &str {
        "NeighbourSum"
    }

    fn default_state(&self) -> State {
        0
    }

    fn accepts(&self, state: State) -> bool {
        (0..4).contains(&state)
    }

    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
        Transition::to((ctx.count_where(|c| c.state != 0) % 4) as State)
    }
}
