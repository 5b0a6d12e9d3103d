//! Schelling-style segregation.

use tessel_core::{Metadata, SimulationError, State};
use tessel_rule::{CellContext, ConfiguredRule, Rule, Transition};

/// Two agent populations that move away from unlike neighbourhoods.
///
/// An agent is satisfied when the share of like agents among its agent
/// neighbours is at least `satisfied` (an agent with no agent neighbours is
/// satisfied). Unsatisfied agents vacate their cell. An empty cell is
/// settled, with probability `fill_rate`, by the type of a uniformly
/// chosen agent neighbour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segregation {
    satisfied: f64,
    fill_rate: f64,
}

impl Segregation {
    /// Unoccupied cell.
    pub const EMPTY: State = 0;
    /// First agent population.
    pub const AGENT_A: State = 1;
    /// Second agent population.
    pub const AGENT_B: State = 2;
    /// Metadata key for the satisfaction threshold.
    pub const SATISFIED_KEY: &'static str = "Satisfied";
    /// Metadata key for the settlement probability.
    pub const FILL_RATE_KEY: &'static str = "FillRate";
    /// Settlement probability when `FillRate` is absent.
    pub const DEFAULT_FILL_RATE: f64 = 0.5;

    /// Build with explicit parameters, both in `[0, 1]`.
    pub fn new(satisfied: f64, fill_rate: f64) -> Self {
        Self {
            satisfied,
            fill_rate,
        }
    }

    /// The satisfaction threshold.
    pub fn satisfied(&self) -> f64 {
        self.satisfied
    }

    /// The settlement probability.
    pub fn fill_rate(&self) -> f64 {
        self.fill_rate
    }

    fn is_agent(state: State) -> bool {
        state == Self::AGENT_A || state == Self::AGENT_B
    }

    fn is_satisfied(&self, ctx: &CellContext<'_>) -> bool {
        let like = ctx.count_state(ctx.state());
        let agents = ctx.count_where(|c| Self::is_agent(c.state));
        agents == 0 || like as f64 / agents as f64 >= self.satisfied
    }
}

impl Rule for Segregation {
    fn name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn default_state(&self) -> State {
        Self::EMPTY
    }

    fn accepts(&self, state: State) -> bool {
        state == Self::EMPTY || Self::is_agent(state)
    }

    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
        if Self::is_agent(ctx.state()) {
            return if self.is_satisfied(ctx) {
                Transition::to(ctx.state())
            } else {
                Transition::to(Self::EMPTY)
            };
        }
        if !ctx.chance(self.fill_rate) {
            return Transition::to(Self::EMPTY);
        }
        match ctx.choose_neighbour(|c| Self::is_agent(c.state)) {
            Some(settler) => Transition::to(settler.state),
            None => Transition::to(Self::EMPTY),
        }
    }
}

impl ConfiguredRule for Segregation {
    const TYPE_NAME: &'static str = "Segregation";
    const REQUIRED_KEYS: &'static [&'static str] = &[Self::SATISFIED_KEY];

    fn from_metadata(metadata: &Metadata) -> Result<Self, SimulationError> {
        Ok(Self::new(
            metadata.probability(Self::SATISFIED_KEY)?,
            metadata.probability_or(Self::FILL_RATE_KEY, Self::DEFAULT_FILL_RATE)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_test_utils::transition_of;

    #[test]
    fn satisfied_agent_stays() {
        let rule = Segregation::new(0.5, 0.0);
        // 2 like out of 3 agents.
        assert_eq!(transition_of(&rule, 1, &[1, 1, 2, 0]).state, 1);
    }

    #[test]
    fn unsatisfied_agent_vacates() {
        let rule = Segregation::new(0.5, 0.0);
        // 1 like out of 3 agents.
        assert_eq!(transition_of(&rule, 2, &[1, 1, 2, 0]).state, 0);
    }

    #[test]
    fn isolated_agent_is_satisfied() {
        let rule = Segregation::new(1.0, 0.0);
        assert_eq!(transition_of(&rule, 2, &[0, 0, 0]).state, 2);
    }

    #[test]
    fn empty_cell_settles_from_neighbours_only() {
        let rule = Segregation::new(0.3, 1.0);
        assert_eq!(transition_of(&rule, 0, &[0, 2, 0]).state, 2);
        assert_eq!(transition_of(&rule, 0, &[0, 0]).state, 0);
        let settled = transition_of(&rule, 0, &[1, 2]).state;
        assert!(settled == 1 || settled == 2);
    }

    #[test]
    fn zero_fill_rate_never_settles() {
        let rule = Segregation::new(0.3, 0.0);
        assert_eq!(transition_of(&rule, 0, &[1, 1, 1]).state, 0);
    }

    #[test]
    fn from_metadata_validates() {
        let meta: Metadata = [("Satisfied", "0.4")].into_iter().collect();
        let rule = Segregation::from_metadata(&meta).unwrap();
        assert_eq!(rule.satisfied(), 0.4);
        assert_eq!(rule.fill_rate(), Segregation::DEFAULT_FILL_RATE);

        let meta: Metadata = [("Satisfied", "2")].into_iter().collect();
        assert!(matches!(
            Segregation::from_metadata(&meta),
            Err(SimulationError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Segregation::from_metadata(&Metadata::new()),
            Err(SimulationError::MissingArgument { .. })
        ));
    }
}
