//! Errors raised while configuring a simulation.
//!
//! Every variant is a user-input problem detected at construction time.
//! Once a simulation is running, advancing it never produces one of these.

use std::error::Error;
use std::fmt;

/// Errors from simulation construction and registry lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulationError {
    /// A metadata key required by the chosen rule is absent.
    MissingArgument {
        /// The absent key.
        key: String,
    },
    /// The configured type name is not in the registry.
    InvalidSimulationType {
        /// The offending type name.
        name: String,
    },
    /// A metadata value is present but cannot be used.
    InvalidArgument {
        /// The metadata key.
        key: String,
        /// The raw value as supplied.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// The initial grid is inconsistent: wrong dimensions, ragged rows, or
    /// state codes outside the rule's domain.
    MalformedInput {
        /// Description of the problem.
        reason: String,
    },
    /// A type name was registered twice.
    DuplicateType {
        /// The duplicated type name.
        name: String,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { key } => {
                write!(f, "missing simulation argument '{key}'")
            }
            Self::InvalidSimulationType { name } => {
                write!(f, "invalid simulation type '{name}'")
            }
            Self::InvalidArgument { key, value, reason } => {
                write!(f, "invalid value '{value}' for '{key}': {reason}")
            }
            Self::MalformedInput { reason } => write!(f, "malformed input: {reason}"),
            Self::DuplicateType { name } => {
                write!(f, "simulation type '{name}' registered twice")
            }
        }
    }
}

impl Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_names_key() {
        let err = SimulationError::MissingArgument {
            key: "Satisfied".into(),
        };
        assert!(err.to_string().contains("'Satisfied'"));
    }

    #[test]
    fn invalid_argument_reports_value_and_reason() {
        let err = SimulationError::InvalidArgument {
            key: "BurnProbability".into(),
            value: "lots".into(),
            reason: "expected a number".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lots"));
        assert!(msg.contains("BurnProbability"));
        assert!(msg.contains("expected a number"));
    }
}
