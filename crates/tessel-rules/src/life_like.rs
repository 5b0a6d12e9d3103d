//! Outer-totalistic life-like rules in `B/S` notation.

use std::fmt;
use std::str::FromStr;

use tessel_core::{Metadata, SimulationError, State};
use tessel_rule::{CellContext, ConfiguredRule, Rule, Transition};

/// A binary rule given by birth and survival neighbour counts.
///
/// Counts are the number of live neighbours, `0..=8`. A dead cell is born
/// when its count is in the birth set; a live cell survives when its count
/// is in the survival set. Counts above 8 (possible with extended
/// patterns) never match.
///
/// # Examples
///
/// ```
/// use tessel_rules::LifeLike;
///
/// let high_life: LifeLike = "B36/S23".parse().unwrap();
/// assert!(high_life.births_on(6));
/// assert!(!high_life.survives_on(6));
/// assert_eq!(high_life.to_string(), "B36/S23");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeLike {
    birth: u16,
    survival: u16,
}

impl LifeLike {
    /// Dead cell.
    pub const DEAD: State = 0;
    /// Live cell.
    pub const ALIVE: State = 1;
    /// Metadata key holding the rulestring.
    pub const RULE_KEY: &'static str = "Rule";

    /// Build from explicit count lists.
    pub fn new(birth: &[u8], survival: &[u8]) -> Self {
        Self {
            birth: mask(birth),
            survival: mask(survival),
        }
    }

    /// Conway's Life, `B3/S23`.
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// HighLife, `B36/S23`.
    pub fn high_life() -> Self {
        Self::new(&[3, 6], &[2, 3])
    }

    /// Day & Night, `B3678/S34678`.
    pub fn day_and_night() -> Self {
        Self::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    /// Whether a dead cell with `n` live neighbours is born.
    pub fn births_on(&self, n: usize) -> bool {
        n <= 8 && self.birth & (1 << n) != 0
    }

    /// Whether a live cell with `n` live neighbours survives.
    pub fn survives_on(&self, n: usize) -> bool {
        n <= 8 && self.survival & (1 << n) != 0
    }
}

fn mask(counts: &[u8]) -> u16 {
    counts
        .iter()
        .filter(|&&n| n <= 8)
        .fold(0, |m, &n| m | (1 << n))
}

fn invalid(raw: &str, reason: &str) -> SimulationError {
    SimulationError::InvalidArgument {
        key: LifeLike::RULE_KEY.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for LifeLike {
    type Err = SimulationError;

    /// Parse `B<digits>/S<digits>` in either order, case-insensitive.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut birth = None;
        let mut survival = None;
        for part in raw.trim().split('/') {
            let mut chars = part.trim().chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survival,
                _ => return Err(invalid(raw, "expected B<counts>/S<counts>")),
            };
            if slot.is_some() {
                return Err(invalid(raw, "birth or survival given twice"));
            }
            let mut m = 0u16;
            for ch in chars {
                match ch.to_digit(10) {
                    Some(d) if d <= 8 => m |= 1 << d,
                    _ => return Err(invalid(raw, "neighbour counts must be digits 0-8")),
                }
            }
            *slot = Some(m);
        }
        match (birth, survival) {
            (Some(birth), Some(survival)) => Ok(Self { birth, survival }),
            _ => Err(invalid(raw, "expected B<counts>/S<counts>")),
        }
    }
}

impl fmt::Display for LifeLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |m: u16| -> String {
            (0..=8u32)
                .filter(|d| m & (1 << d) != 0)
                .filter_map(|d| char::from_digit(d, 10))
                .collect()
        };
        write!(f, "B{}/S{}", digits(self.birth), digits(self.survival))
    }
}

impl Rule for LifeLike {
    fn name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn default_state(&self) -> State {
        Self::DEAD
    }

    fn accepts(&self, state: State) -> bool {
        state == Self::DEAD || state == Self::ALIVE
    }

    fn transition(&self, ctx: &mut CellContext<'_>) -> Transition {
        let n = ctx.count_state(Self::ALIVE);
        let alive = if ctx.state() == Self::ALIVE {
            self.survives_on(n)
        } else {
            self.births_on(n)
        };
        Transition::to(if alive { Self::ALIVE } else { Self::DEAD })
    }
}

impl ConfiguredRule for LifeLike {
    const TYPE_NAME: &'static str = "LifeLike";
    const REQUIRED_KEYS: &'static [&'static str] = &[Self::RULE_KEY];

    fn from_metadata(metadata: &Metadata) -> Result<Self, SimulationError> {
        metadata.require(Self::RULE_KEY)?.parse()
    }
}
