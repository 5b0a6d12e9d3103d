//! Scheduler configuration, validation, and error types.
//!
//! [`SchedulerConfig`] is the input to
//! [`TickScheduler::start`](crate::TickScheduler::start).
//! [`validate()`](SchedulerConfig::validate) checks it before any thread is
//! spawned.

use std::error::Error;
use std::fmt;
use std::time::Duration;

// ── SchedulerConfig ───────────────────────────────────────────────

/// Configuration for a [`TickScheduler`](crate::TickScheduler).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Interval between ticks. Default: 800 ms (speed level 1).
    pub period: Duration,
    /// Whether the scheduler starts paused. Default: `true`.
    pub start_paused: bool,
    /// Number of published snapshots retained. Default: 8. Minimum: 2.
    pub ring_buffer_size: usize,
    /// Capacity of the attach/detach command queue. Default: 16.
    pub command_queue: usize,
}

impl SchedulerConfig {
    /// Speed level used when none is chosen.
    pub const DEFAULT_SPEED: u32 = 1;
    /// Fastest speed level.
    pub const MAX_SPEED: u32 = 4;

    /// Tick period for a speed level: `(5 − level) × 200 ms`.
    ///
    /// Levels run from 1 (800 ms) to [`MAX_SPEED`](Self::MAX_SPEED)
    /// (200 ms).
    pub fn period_for_speed(level: u32) -> Result<Duration, ConfigError> {
        if !(1..=Self::MAX_SPEED).contains(&level) {
            return Err(ConfigError::InvalidSpeed { level });
        }
        Ok(Duration::from_millis(u64::from(5 - level) * 200))
    }

    /// This configuration with the period for `level`.
    pub fn with_speed(self, level: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            period: Self::period_for_speed(level)?,
            ..self
        })
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period.is_zero() {
            return Err(ConfigError::InvalidPeriod {
                period: self.period,
            });
        }
        if self.ring_buffer_size < 2 {
            return Err(ConfigError::RingBufferTooSmall {
                configured: self.ring_buffer_size,
            });
        }
        if self.command_queue == 0 {
            return Err(ConfigError::CommandQueueZero);
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(800),
            start_paused: true,
            ring_buffer_size: 8,
            command_queue: 16,
        }
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected while configuring or starting a scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The tick period is zero.
    InvalidPeriod {
        /// The rejected period.
        period: Duration,
    },
    /// A speed level outside `1..=MAX_SPEED`.
    InvalidSpeed {
        /// The rejected level.
        level: u32,
    },
    /// Ring buffer size is below the minimum of 2.
    RingBufferTooSmall {
        /// The configured size that was too small.
        configured: usize,
    },
    /// Command queue capacity is zero.
    CommandQueueZero,
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPeriod { period } => {
                write!(f, "tick period must be positive, got {period:?}")
            }
            Self::InvalidSpeed { level } => write!(
                f,
                "speed level {level} outside 1..={}",
                SchedulerConfig::MAX_SPEED
            ),
            Self::RingBufferTooSmall { configured } => {
                write!(f, "ring_buffer_size {configured} is below minimum of 2")
            }
            Self::CommandQueueZero => write!(f, "command_queue must be at least 1"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "failed to spawn tick thread: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}
