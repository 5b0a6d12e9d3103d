//! Probabilistic forest fire.

use tessel_core::{Metadata, SimulationError, State};
use tessel_rule::{CellContext, ConfiguredRule, Rule, Transition};

/// Fire spreading through a forest.
///
/// - burning → empty
/// - tree with `k` burning neighbours ignites with probability
///   `1 − (1 − burn_probability)^k`
/// - empty regrows a tree with probability `growth_probability`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireSpread {
    burn_probability: f64,
    growth_probability: f64,
}

impl FireSpread {
    /// Bare ground.
    pub const EMPTY: State = 0;
    /// Unburnt tree.
    pub const TREE: State = 1;
    /// Burning tree.
    pub const BURNING: State = 2;
    /// Metadata key for the per-neighbour ignition chance.
    pub const BURN_KEY: &'static str = "BurnProbability";
    /// Metadata key for the regrowth chance.
    pub const GROWTH_KEY: &'static str = "GrowthProbability";

    /// Build with explicit probabilities, both in `[0, 1]`.
    pub fn new(burn_probability: f64, growth_probability: f64) -> Self {
        Self {
            burn_probability,
            growth_probability,
        }
    }

    /// Chance that a tree with `burning` burning neighbours ignites.
    pub fn ignition_probability(&self, burning: usize) -> f64 {
        let exp = i32::try_from(burning).unwrap_or(i32::MAX);
        1.0 - (1.0 - self.burn_probability).powi(exp)
    }
}

impl Rule for FireSpread {
    fn name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn default_state(&self) -> State {
        Self::EMPTY
    }

    fn accepts(&self, state: State) -> bool {
        (Self::EMPTY..=Self::BURNING).contains(&state)
    }

    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
        let next = match ctx.state() {
            Self::BURNING => Self::EMPTY,
            Self::TREE => {
                let burning = ctx.count_state(Self::BURNING);
                if burning > 0 && ctx.chance(self.ignition_probability(burning)) {
                    Self::BURNING
                } else {
                    Self::TREE
                }
            }
            _ => {
                if ctx.chance(self.growth_probability) {
                    Self::TREE
                } else {
                    Self::EMPTY
                }
            }
        };
        Transition::to(next)
    }
}

impl ConfiguredRule for FireSpread {
    const TYPE_NAME: &'static str = "FireSpread";
    const REQUIRED_KEYS: &'static [&'static str] = &[Self::BURN_KEY];

    fn from_metadata(metadata: &Metadata) -> Result<Self, SimulationError> {
        Ok(Self::new(
            metadata.probability(Self::BURN_KEY)?,
            metadata.probability_or(Self::GROWTH_KEY, 0.0)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tessel_core::{Cell, Position};
    use tessel_test_utils::{transition_of, TransitionHarness};

    #[test]
    fn burning_burns_out() {
        let rule = FireSpread::new(1.0, 0.0);
        assert_eq!(transition_of(&rule, 2, &[2, 2]).state, 0);
    }

    #[test]
    fn certain_ignition() {
        let rule = FireSpread::new(1.0, 0.0);
        assert_eq!(transition_of(&rule, 1, &[2, 0]).state, 2);
        assert_eq!(transition_of(&rule, 1, &[1, 0]).state, 1);
    }

    #[test]
    fn zero_probability_never_ignites() {
        let rule = FireSpread::new(0.0, 0.0);
        assert_eq!(transition_of(&rule, 1, &[2; 8]).state, 1);
    }

    #[test]
    fn ignition_compounds_over_burning_neighbours() {
        let rule = FireSpread::new(0.5, 0.0);
        assert_eq!(rule.ignition_probability(0), 0.0);
        assert!((rule.ignition_probability(1) - 0.5).abs() < 1e-12);
        assert!((rule.ignition_probability(2) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn growth_regrows_empty_cells() {
        assert_eq!(transition_of(&FireSpread::new(0.0, 1.0), 0, &[]).state, 1);
        assert_eq!(transition_of(&FireSpread::new(0.0, 0.0), 0, &[]).state, 0);
    }

    #[test]
    fn outcome_is_fixed_by_seed_generation_and_position() {
        let rule = FireSpread::new(0.5, 0.0);
        let ignite = |seed| {
            TransitionHarness::new(Cell::new(Position::new(4, 2), 1))
                .neighbours(vec![Cell::new(Position::new(0, 0), 2)])
                .generation(3)
                .seed(seed)
                .run(&rule)
        };
        for seed in 0..16 {
            assert_eq!(ignite(seed), ignite(seed));
        }
    }

    #[test]
    fn from_metadata_reads_optional_growth() {
        let meta: Metadata = [("BurnProbability", "0.25"), ("GrowthProbability", "0.1")]
            .into_iter()
            .collect();
        assert_eq!(FireSpread::from_metadata(&meta).unwrap(), FireSpread::new(0.25, 0.1));
        assert!(matches!(
            FireSpread::from_metadata(&Metadata::new()),
            Err(SimulationError::MissingArgument { ref key }) if key == "BurnProbability"
        ));
    }

    proptest! {
        #[test]
        fn ignition_probability_grows_with_burning_neighbours(p in 0.0f64..=1.0, k in 0usize..8) {
            let rule = FireSpread::new(p, 0.0);
            let here = rule.ignition_probability(k);
            let more = rule.ignition_probability(k + 1);
            prop_assert!((0.0..=1.0).contains(&here));
            prop_assert!(more + 1e-12 >= here, "k={} gives {} but k+1 gives {}", k, here, more);
        }

        #[test]
        fn no_burning_neighbours_never_ignites(p in 0.0f64..=1.0) {
            prop_assert_eq!(FireSpread::new(p, 0.0).ignition_probability(0), 0.0);
        }
    }
}
