//! Conway's Game of Life.

use tessel_core::{Metadata, SimulationError, State};
use tessel_rule::{CellContext, ConfiguredRule, Rule, Transition};

/// Conway's Game of Life over any neighbourhood pattern.
///
/// Counts neighbours that are not dead:
/// - exactly 2: the cell keeps its state
/// - exactly 3: the cell becomes alive
/// - otherwise: the cell dies
///
/// The default value is [`ALIVE`](Self::ALIVE).
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOfLife;

impl GameOfLife {
    /// Dead cell.
    pub const DEAD: State = 0;
    /// Live cell.
    pub const ALIVE: State = 1;
}

impl Rule for GameOfLife {
    fn name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn default_state(&self) -> State {
        Self::ALIVE
    }

    fn accepts(&self, state: State) -> bool {
        state == Self::DEAD || state == Self::ALIVE
    }

    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
        match ctx.count_where(|c| c.state != Self::DEAD) {
            2 => Transition::to(ctx.state()),
            3 => Transition::to(Self::ALIVE),
            _ => Transition::to(Self::DEAD),
        }
    }
}

impl ConfiguredRule for GameOfLife {
    const TYPE_NAME: &'static str = "GameOfLife";
    const REQUIRED_KEYS: &'static [&'static str] = &[];

    fn from_metadata(_metadata: &Metadata) -> Result<Self, SimulationError> {
        Ok(Self)
    }
}
