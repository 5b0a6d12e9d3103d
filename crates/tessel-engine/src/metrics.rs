//! Per-advance and per-scheduler metrics.

use std::time::Duration;

use tessel_core::Generation;

/// Timing data for the most recent [`advance()`](crate::Simulation::advance).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvanceMetrics {
    /// Wall-clock time for the whole pass, swap included.
    pub duration: Duration,
    /// Cells written into the next buffer.
    pub cells_written: usize,
    /// Generation after the swap.
    pub generation: Generation,
}

/// Counters published by the tick thread.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Timer firings since start, paused or not.
    pub ticks: u64,
    /// Ticks that advanced a simulation.
    pub advances: u64,
    /// Generation of the latest published snapshot.
    pub generation: Generation,
    /// Whether a simulation is attached.
    pub attached: bool,
}
