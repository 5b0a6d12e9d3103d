//! Explicit type-name → rule constructor table.
//!
//! [`Registry`] replaces name-based reflection: every simulation type is
//! registered up front with its required metadata keys and a constructor.
//! Lookup of an unknown name is `SimulationError::InvalidSimulationType`.

use std::fmt;

use indexmap::IndexMap;
use tessel_core::{Metadata, SimulationError, State};
use tessel_grid::Grid;
use tessel_rule::{ConfiguredRule, Rule};
use tessel_rules::{FireSpread, GameOfLife, LifeLike, Percolation, Segregation, WaTor};
use tessel_space::{NeighborhoodPattern, PatternKind};

use crate::simulation::Simulation;

/// Constructor for a boxed rule from metadata.
pub type BuildFn = fn(&Metadata) -> Result<Box<dyn Rule>, SimulationError>;

/// One registered simulation type.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    /// Name matched against the `Type` metadata key.
    pub type_name: &'static str,
    /// Keys that must be present in the metadata.
    pub required_keys: &'static [&'static str],
    /// Rule constructor.
    pub build: BuildFn,
}

impl RegistryEntry {
    /// The entry for a [`ConfiguredRule`].
    pub fn of<R: ConfiguredRule>() -> Self {
        Self {
            type_name: R::TYPE_NAME,
            required_keys: R::REQUIRED_KEYS,
            build: build_rule::<R>,
        }
    }

    /// Check required keys, then build the rule.
    pub fn build_rule(&self, metadata: &Metadata) -> Result<Box<dyn Rule>, SimulationError> {
        if let Some(key) = self
            .required_keys
            .iter()
            .find(|key| !metadata.contains_key(key))
        {
            return Err(SimulationError::MissingArgument {
                key: (*key).to_string(),
            });
        }
        (self.build)(metadata)
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("type_name", &self.type_name)
            .field("required_keys", &self.required_keys)
            .finish_non_exhaustive()
    }
}

fn build_rule<R: ConfiguredRule>(metadata: &Metadata) -> Result<Box<dyn Rule>, SimulationError> {
    Ok(Box::new(R::from_metadata(metadata)?))
}

/// Table of known simulation types, in registration order.
///
/// # Examples
///
/// ```
/// use tessel_core::Metadata;
/// use tessel_engine::Registry;
///
/// let registry = Registry::standard();
/// assert!(registry.contains("GameOfLife"));
/// assert_eq!(registry.required_keys("FireSpread").unwrap(), &["BurnProbability"]);
///
/// let meta: Metadata = [("Type", "GameOfLife")].into_iter().collect();
/// let sim = registry.load(&meta, vec![vec![0, 1, 0], vec![0, 1, 0]]).unwrap();
/// assert_eq!(sim.default_value(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: IndexMap<&'static str, RegistryEntry>,
}

impl Registry {
    /// Metadata key for the probabilistic-rule seed (optional, default 0).
    pub const SEED_KEY: &'static str = "Seed";

    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in rule.
    pub fn standard() -> Self {
        let mut r = Self::new();
        for entry in [
            RegistryEntry::of::<GameOfLife>(),
            RegistryEntry::of::<LifeLike>(),
            RegistryEntry::of::<Segregation>(),
            RegistryEntry::of::<Percolation>(),
            RegistryEntry::of::<FireSpread>(),
            RegistryEntry::of::<WaTor>(),
        ] {
            r.entries.insert(entry.type_name, entry);
        }
        r
    }

    /// Add an entry. Returns `Err(SimulationError::DuplicateType)` if the
    /// name is taken.
    pub fn register(&mut self, entry: RegistryEntry) -> Result<(), SimulationError> {
        if self.entries.contains_key(entry.type_name) {
            return Err(SimulationError::DuplicateType {
                name: entry.type_name.to_string(),
            });
        }
        self.entries.insert(entry.type_name, entry);
        Ok(())
    }

    /// Register a [`ConfiguredRule`] under its `TYPE_NAME`.
    pub fn register_rule<R: ConfiguredRule>(&mut self) -> Result<(), SimulationError> {
        self.register(RegistryEntry::of::<R>())
    }

    /// Registered type names in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The entry for `name`.
    pub fn entry(&self, name: &str) -> Result<&RegistryEntry, SimulationError> {
        self.entries
            .get(name)
            .ok_or_else(|| SimulationError::InvalidSimulationType {
                name: name.to_string(),
            })
    }

    /// Required metadata keys for `name`.
    pub fn required_keys(&self, name: &str) -> Result<&'static [&'static str], SimulationError> {
        Ok(self.entry(name)?.required_keys)
    }

    /// Build a simulation of type `name` over an existing grid and pattern.
    ///
    /// Checks that every required key is present before parsing any of
    /// them. The grid keeps the baseline the caller chose; it must be a
    /// state the rule accepts, as checked by [`Simulation::new`].
    pub fn build(
        &self,
        name: &str,
        grid: Grid,
        pattern: Box<dyn NeighborhoodPattern>,
        metadata: &Metadata,
    ) -> Result<Simulation, SimulationError> {
        let entry = self.entry(name)?;
        let rule = entry.build_rule(metadata)?;
        let seed = metadata.parse_or(Self::SEED_KEY, 0u64)?;
        Simulation::new(entry.type_name, grid, pattern, rule, seed)
    }

    /// Build a simulation of the type named by the `Type` key.
    pub fn from_metadata(
        &self,
        grid: Grid,
        pattern: Box<dyn NeighborhoodPattern>,
        metadata: &Metadata,
    ) -> Result<Simulation, SimulationError> {
        self.build(metadata.type_name()?, grid, pattern, metadata)
    }

    /// Build a simulation from metadata and initial states.
    ///
    /// The type comes from `Type`, the pattern from the optional
    /// `Neighborhood` / `EdgePolicy` / `Radius` keys, and the grid's
    /// baseline from the rule's default state.
    pub fn load(
        &self,
        metadata: &Metadata,
        rows: Vec<Vec<State>>,
    ) -> Result<Simulation, SimulationError> {
        let entry = self.entry(metadata.type_name()?)?;
        let rule = entry.build_rule(metadata)?;
        let pattern = PatternKind::from_metadata(metadata)?;
        let grid = Grid::from_rows(rows, rule.default_state())?;
        let seed = metadata.parse_or(Self::SEED_KEY, 0u64)?;
        Simulation::new(entry.type_name, grid, pattern, rule, seed)
    }
}
