//! Ordered string-to-string configuration map.

use crate::error::SimulationError;
use indexmap::IndexMap;
use std::str::FromStr;

/// Ordered key/value configuration produced by an external parser.
///
/// Always carries [`Metadata::TYPE`] (the registry key) when it describes a
/// complete simulation; further keys are validated by the chosen rule.
/// Insertion order is preserved.
///
/// # Examples
///
/// ```
/// use tessel_core::Metadata;
///
/// let meta: Metadata = [("Type", "FireSpread"), ("BurnProbability", "0.4")]
///     .into_iter()
///     .collect();
/// assert_eq!(meta.type_name().unwrap(), "FireSpread");
/// let p: f64 = meta.parse("BurnProbability").unwrap();
/// assert!((p - 0.4).abs() < 1e-12);
/// assert!(meta.require("Satisfied").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: IndexMap<String, String>,
}

impl Metadata {
    /// Key selecting the registry entry.
    pub const TYPE: &'static str = "Type";
    /// Key referencing the initial grid contents.
    pub const INITIAL_STATES: &'static str = "InitialStates";

    /// Empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Raw value for a required key.
    pub fn require(&self, key: &str) -> Result<&str, SimulationError> {
        self.get(key).ok_or_else(|| SimulationError::MissingArgument {
            key: key.to_string(),
        })
    }

    /// The configured simulation type name.
    pub fn type_name(&self) -> Result<&str, SimulationError> {
        self.require(Self::TYPE)
    }

    /// Parse a required key.
    pub fn parse<T>(&self, key: &str) -> Result<T, SimulationError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.require(key)?;
        parse_value(key, raw)
    }

    /// Parse an optional key, falling back to `default` when absent.
    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T, SimulationError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => parse_value(key, raw),
            None => Ok(default),
        }
    }

    /// Parse a required probability in `[0, 1]`.
    pub fn probability(&self, key: &str) -> Result<f64, SimulationError> {
        let p: f64 = self.parse(key)?;
        check_probability(key, p)
    }

    /// Parse an optional probability in `[0, 1]`.
    pub fn probability_or(&self, key: &str, default: f64) -> Result<f64, SimulationError> {
        let p: f64 = self.parse_or(key, default)?;
        check_probability(key, p)
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, SimulationError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| SimulationError::InvalidArgument {
            key: key.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

fn check_probability(key: &str, p: f64) -> Result<f64, SimulationError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(SimulationError::InvalidArgument {
            key: key.to_string(),
            value: p.to_string(),
            reason: "must be a probability in [0, 1]".to_string(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Metadata {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
