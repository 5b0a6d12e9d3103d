//! Wa-Tor predator-prey dynamics as a local rule.

use tessel_core::{Cell, Metadata, SimulationError, State};
use tessel_rule::{CellContext, ConfiguredRule, Rule, Transition};

/// Fish and sharks on a toroidal ocean, expressed cell-locally.
///
/// Every cell decides its own next value from the current generation:
///
/// - **fish**: eaten (→ water) if any neighbour is a shark; otherwise ages
///   by one. A fish at breeding age with a water neighbour breeds and its
///   age resets to 0.
/// - **shark**: loses one energy per generation; next to a fish it eats and
///   its energy is restored to `shark_energy`. At zero energy it dies.
///   Breeds like a fish, on `shark_breed_age`.
/// - **water**: becomes a newborn fish if a neighbouring fish is breeding,
///   otherwise a newborn shark if a neighbouring shark is breeding.
///
/// Attributes: `age` on fish and sharks, `energy` on sharks. Cells loaded
/// without attributes start at age 0 and full energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaTor {
    fish_breed_age: i64,
    shark_breed_age: i64,
    shark_energy: i64,
}

impl WaTor {
    /// Open water.
    pub const WATER: State = 0;
    /// Prey.
    pub const FISH: State = 1;
    /// Predator.
    pub const SHARK: State = 2;

    /// Attribute: generations since birth or last breeding.
    pub const AGE: &'static str = "age";
    /// Attribute: remaining shark energy.
    pub const ENERGY: &'static str = "energy";

    /// Metadata key for the fish breeding age.
    pub const FISH_BREED_KEY: &'static str = "FishBreedAge";
    /// Metadata key for the shark breeding age.
    pub const SHARK_BREED_KEY: &'static str = "SharkBreedAge";
    /// Metadata key for a shark's starting and restored energy.
    pub const SHARK_ENERGY_KEY: &'static str = "SharkEnergy";

    /// Build with explicit parameters, all at least 1.
    pub fn new(fish_breed_age: i64, shark_breed_age: i64, shark_energy: i64) -> Self {
        Self {
            fish_breed_age,
            shark_breed_age,
            shark_energy,
        }
    }

    fn age(cell: &Cell) -> i64 {
        cell.attribute(Self::AGE).unwrap_or(0)
    }

    fn energy(&self, cell: &Cell) -> i64 {
        cell.attribute(Self::ENERGY).unwrap_or(self.shark_energy)
    }

    fn breed_age(&self, state: State) -> i64 {
        if state == Self::SHARK {
            self.shark_breed_age
        } else {
            self.fish_breed_age
        }
    }

    /// Whether `cell` breeds this generation (given room).
    fn is_breeding(&self, cell: &Cell) -> bool {
        (cell.state == Self::FISH || cell.state == Self::SHARK)
            && Self::age(cell) >= self.breed_age(cell.state)
    }

    /// Age after this generation: reset on breeding, otherwise +1.
    fn next_age(&self, ctx: &CellContext<'_>) -> i64 {
        let cell = ctx.cell();
        if self.is_breeding(cell) && ctx.count_state(Self::WATER) > 0 {
            0
        } else {
            Self::age(cell) + 1
        }
    }

    fn newborn(&self, state: State) -> Transition {
        let t = Transition::to(state).with_attribute(Self::AGE, 0);
        if state == Self::SHARK {
            t.with_attribute(Self::ENERGY, self.shark_energy)
        } else {
            t
        }
    }
}

fn positive(metadata: &Metadata, key: &str) -> Result<i64, SimulationError> {
    let v: i64 = metadata.parse(key)?;
    if v < 1 {
        return Err(SimulationError::InvalidArgument {
            key: key.to_string(),
            value: v.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(v)
}

impl Rule for WaTor {
    fn name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn default_state(&self) -> State {
        Self::WATER
    }

    fn accepts(&self, state: State) -> bool {
        (Self::WATER..=Self::SHARK).contains(&state)
    }

    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
        match ctx.state() {
            Self::FISH => {
                if ctx.count_state(Self::SHARK) > 0 {
                    Transition::to(Self::WATER)
                } else {
                    Transition::to(Self::FISH).with_attribute(Self::AGE, self.next_age(ctx))
                }
            }
            Self::SHARK => {
                let energy = if ctx.count_state(Self::FISH) > 0 {
                    self.shark_energy
                } else {
                    self.energy(ctx.cell()) - 1
                };
                if energy <= 0 {
                    return Transition::to(Self::WATER);
                }
                Transition::to(Self::SHARK)
                    .with_attribute(Self::AGE, self.next_age(ctx))
                    .with_attribute(Self::ENERGY, energy)
            }
            _ => {
                let breeding = |state: State| {
                    ctx.neighbours()
                        .iter()
                        .any(|c| c.state == state && self.is_breeding(c))
                };
                if breeding(Self::FISH) {
                    self.newborn(Self::FISH)
                } else if breeding(Self::SHARK) {
                    self.newborn(Self::SHARK)
                } else {
                    Transition::to(Self::WATER)
                }
            }
        }
    }
}

impl ConfiguredRule for WaTor {
    const TYPE_NAME: &'static str = "WaTor";
    const REQUIRED_KEYS: &'static [&'static str] = &[
        Self::FISH_BREED_KEY,
        Self::SHARK_BREED_KEY,
        Self::SHARK_ENERGY_KEY,
    ];

    fn from_metadata(metadata: &Metadata) -> Result<Self, SimulationError> {
        Ok(Self::new(
            positive(metadata, Self::FISH_BREED_KEY)?,
            positive(metadata, Self::SHARK_BREED_KEY)?,
            positive(metadata, Self::SHARK_ENERGY_KEY)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_test_utils::{cell_with, transition_of, TransitionHarness};

    fn rule() -> WaTor {
        WaTor::new(3, 5, 4)
    }

    fn step(centre: Cell, neighbours: Vec<Cell>) -> Transition {
        TransitionHarness::new(centre).neighbours(neighbours).run(&rule())
    }

    // ── Fish ────────────────────────────────────────────────────

    #[test]
    fn fish_next_to_shark_is_eaten() {
        assert_eq!(transition_of(&rule(), WaTor::FISH, &[0, 2, 1]).state, WaTor::WATER);
    }

    #[test]
    fn fish_ages() {
        let t = step(cell_with(1, &[("age", 1)]), vec![cell_with(1, &[])]);
        assert_eq!(t.state, WaTor::FISH);
        assert_eq!(t.attributes.get("age"), Some(&2));
    }

    #[test]
    fn breeding_fish_resets_age_only_with_room() {
        let ready = cell_with(1, &[("age", 3)]);
        let with_room = step(ready.clone(), vec![cell_with(0, &[])]);
        assert_eq!(with_room.attributes.get("age"), Some(&0));
        let crowded = step(ready, vec![cell_with(1, &[])]);
        assert_eq!(crowded.attributes.get("age"), Some(&4));
    }

    // ── Sharks ──────────────────────────────────────────────────

    #[test]
    fn shark_starves_without_fish() {
        let t = step(cell_with(2, &[("energy", 1)]), vec![cell_with(0, &[])]);
        assert_eq!(t.state, WaTor::WATER);
    }

    #[test]
    fn shark_loses_energy_each_generation() {
        let t = step(cell_with(2, &[]), vec![cell_with(0, &[])]);
        assert_eq!(t.state, WaTor::SHARK);
        assert_eq!(t.attributes.get("energy"), Some(&3));
        assert_eq!(t.attributes.get("age"), Some(&1));
    }

    #[test]
    fn shark_eating_restores_energy() {
        let t = step(cell_with(2, &[("energy", 1)]), vec![cell_with(1, &[])]);
        assert_eq!(t.state, WaTor::SHARK);
        assert_eq!(t.attributes.get("energy"), Some(&4));
    }

    // ── Water ───────────────────────────────────────────────────

    #[test]
    fn water_spawns_from_breeding_fish_first() {
        let t = step(
            cell_with(0, &[]),
            vec![cell_with(2, &[("age", 5)]), cell_with(1, &[("age", 3)])],
        );
        assert_eq!(t.state, WaTor::FISH);
        assert_eq!(t.attributes.get("age"), Some(&0));
    }

    #[test]
    fn water_spawns_shark_with_full_energy() {
        let t = step(cell_with(0, &[]), vec![cell_with(2, &[("age", 5)])]);
        assert_eq!(t.state, WaTor::SHARK);
        assert_eq!(t.attributes.get("energy"), Some(&4));
    }

    #[test]
    fn water_stays_without_breeders() {
        let t = step(cell_with(0, &[]), vec![cell_with(1, &[("age", 2)])]);
        assert_eq!(t, Transition::to(WaTor::WATER));
    }

    #[test]
    fn from_metadata_requires_positive_integers() {
        let mut meta: Metadata = [
            ("FishBreedAge", "3"),
            ("SharkBreedAge", "5"),
            ("SharkEnergy", "4"),
        ]
        .into_iter()
        .collect();
        assert_eq!(WaTor::from_metadata(&meta).unwrap(), rule());
        meta.insert("SharkEnergy", "0");
        assert!(matches!(
            WaTor::from_metadata(&meta),
            Err(SimulationError::InvalidArgument { ref key, .. }) if key == "SharkEnergy"
        ));
        meta.remove("FishBreedAge");
        assert!(matches!(
            WaTor::from_metadata(&meta),
            Err(SimulationError::MissingArgument { ref key }) if key == "FishBreedAge"
        ));
    }
}
