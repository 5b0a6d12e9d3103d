//! Fixed-interval background driver for a [`Simulation`].
//!
//! [`TickScheduler`] spawns one named tick thread per instance. The thread
//! fires every `period`; while running it calls
//! [`Simulation::advance`] once per tick and publishes the new generation
//! into a [`SnapshotRing`]. Paused, it keeps ticking without advancing.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tessel_core::Metadata;
//! use tessel_engine::{Registry, SchedulerConfig, SchedulerState, TickScheduler};
//!
//! let meta: Metadata = [("Type", "GameOfLife")].into_iter().collect();
//! let sim = Registry::standard()
//!     .load(&meta, vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]])
//!     .unwrap();
//!
//! let config = SchedulerConfig { period: Duration::from_millis(5), ..Default::default() };
//! let mut scheduler = TickScheduler::start(config).unwrap();
//! assert_eq!(scheduler.state(), SchedulerState::Paused);
//!
//! scheduler.attach(sim).unwrap();
//! scheduler.play();
//! std::thread::sleep(Duration::from_millis(50));
//!
//! let report = scheduler.stop();
//! assert!(report.joined);
//! assert!(report.simulation.is_some());
//! ```

use std::fmt;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use tessel_core::Generation;
use tessel_grid::GridSnapshot;

use crate::config::{ConfigError, SchedulerConfig};
use crate::metrics::SchedulerStats;
use crate::ring::SnapshotRing;
use crate::simulation::Simulation;
use crate::tick_thread::{duration_nanos, SharedState, TickCommand, TickThreadState};

// ── SchedulerState ───────────────────────────────────────────────

/// Observable scheduler state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchedulerState {
    /// Ticking and advancing the attached simulation.
    Running,
    /// Ticking without advancing.
    Paused,
    /// Tick thread joined. Terminal.
    Stopped,
}

impl fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        })
    }
}

// ── SchedulerError ───────────────────────────────────────────────

/// Errors from talking to the tick thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchedulerError {
    /// The scheduler has been stopped.
    Stopped,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "scheduler has been stopped"),
        }
    }
}

impl std::error::Error for SchedulerError {}

// ── StopReport ───────────────────────────────────────────────────

/// Outcome of [`TickScheduler::stop`].
#[derive(Debug)]
pub struct StopReport {
    /// Wall-clock time taken by `stop()`.
    pub elapsed: Duration,
    /// Whether the tick thread was joined successfully.
    pub joined: bool,
    /// Total ticks fired.
    pub ticks: u64,
    /// Total advances performed.
    pub advances: u64,
    /// The simulation that was attached when the thread stopped.
    pub simulation: Option<Simulation>,
}

// ── TickScheduler ────────────────────────────────────────────────

/// Timed driver owning one tick thread.
///
/// All control methods take `&self`, are non-blocking, and never wait for
/// an advance in progress; [`detach`](Self::detach) waits for at most
/// the rest of the current tick.
pub struct TickScheduler {
    ring: Arc<SnapshotRing>,
    shared: Arc<SharedState>,
    cmd_tx: Option<Sender<TickCommand>>,
    tick_thread: Option<JoinHandle<Option<Simulation>>>,
}

impl TickScheduler {
    /// Validate `config` and spawn the tick thread.
    pub fn start(config: SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let ring = Arc::new(SnapshotRing::new(config.ring_buffer_size));
        let shared = Arc::new(SharedState::new(config.period, config.start_paused));
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(config.command_queue);

        let tick_ring = Arc::clone(&ring);
        let tick_shared = Arc::clone(&shared);
        let tick_thread = thread::Builder::new()
            .name("tessel-tick".into())
            .spawn(move || TickThreadState::new(tick_ring, cmd_rx, tick_shared).run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        log::debug!(
            "tick scheduler started: period {:?}, {}",
            config.period,
            if config.start_paused { "paused" } else { "running" }
        );
        Ok(Self {
            ring,
            shared,
            cmd_tx: Some(cmd_tx),
            tick_thread: Some(tick_thread),
        })
    }

    fn wake(&self) {
        if let Some(handle) = &self.tick_thread {
            handle.thread().unpark();
        }
    }

    fn sender(&self) -> Result<&Sender<TickCommand>, SchedulerError> {
        self.cmd_tx.as_ref().ok_or(SchedulerError::Stopped)
    }

    // ── Simulation hand-off ─────────────────────────────────────

    /// Hand `simulation` to the tick thread, replacing any attached one.
    ///
    /// Its current generation is published as soon as the tick thread
    /// picks it up, before any advance.
    pub fn attach(&self, simulation: Simulation) -> Result<(), SchedulerError> {
        self.sender()?
            .send(TickCommand::Attach(Box::new(simulation)))
            .map_err(|_| SchedulerError::Stopped)?;
        self.wake();
        Ok(())
    }

    /// Take the attached simulation back from the tick thread.
    pub fn detach(&self) -> Result<Option<Simulation>, SchedulerError> {
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        self.sender()?
            .send(TickCommand::Detach { reply: reply_tx })
            .map_err(|_| SchedulerError::Stopped)?;
        self.wake();
        reply_rx.recv().map_err(|_| SchedulerError::Stopped)
    }

    // ── Controls ────────────────────────────────────────────────

    /// Resume advancing on each tick.
    pub fn play(&self) {
        self.shared.paused.store(false, Ordering::Release);
    }

    /// Stop advancing; the timer keeps running.
    pub fn pause(&self) {
        self.shared.paused.store(true, Ordering::Release);
    }

    /// Change the tick period. Takes effect from the next tick.
    ///
    /// Returns `Err(ConfigError::InvalidPeriod)` for a zero period.
    pub fn set_period(&self, period: Duration) -> Result<(), ConfigError> {
        if period.is_zero() {
            return Err(ConfigError::InvalidPeriod { period });
        }
        self.shared
            .period_nanos
            .store(duration_nanos(period), Ordering::Release);
        self.wake();
        Ok(())
    }

    /// Change the period to the one for a speed level.
    pub fn set_speed(&self, level: u32) -> Result<(), ConfigError> {
        self.set_period(SchedulerConfig::period_for_speed(level)?)
    }

    // ── Readers ─────────────────────────────────────────────────

    /// Current tick period.
    pub fn period(&self) -> Duration {
        self.shared.period()
    }

    /// Observable state.
    pub fn state(&self) -> SchedulerState {
        if self.tick_thread.is_none() {
            SchedulerState::Stopped
        } else if self.shared.paused.load(Ordering::Acquire) {
            SchedulerState::Paused
        } else {
            SchedulerState::Running
        }
    }

    /// The most recently published snapshot.
    pub fn latest_snapshot(&self) -> Option<Arc<GridSnapshot>> {
        self.ring.latest()
    }

    /// Tick and advance counters.
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            ticks: self.shared.ticks.load(Ordering::Acquire),
            advances: self.shared.advances.load(Ordering::Acquire),
            generation: Generation(self.shared.generation.load(Ordering::Acquire)),
            attached: self.shared.attached.load(Ordering::Acquire),
        }
    }

    // ── Shutdown ────────────────────────────────────────────────

    /// Stop the tick thread and recover the attached simulation.
    ///
    /// Sets the shutdown flag, unparks the thread (waking it from its
    /// budget sleep), and joins it. An advance in progress completes
    /// first. Calling `stop()` again returns an empty report.
    pub fn stop(&mut self) -> StopReport {
        let start = Instant::now();
        let Some(handle) = self.tick_thread.take() else {
            return StopReport {
                elapsed: Duration::ZERO,
                joined: true,
                ticks: self.shared.ticks.load(Ordering::Acquire),
                advances: self.shared.advances.load(Ordering::Acquire),
                simulation: None,
            };
        };

        self.shared.shutdown.store(true, Ordering::Release);
        handle.thread().unpark();
        self.cmd_tx.take();

        let (joined, simulation) = match handle.join() {
            Ok(sim) => (true, sim),
            Err(_) => {
                log::error!("tick thread panicked; attached simulation lost");
                (false, None)
            }
        };
        let report = StopReport {
            elapsed: start.elapsed(),
            joined,
            ticks: self.shared.ticks.load(Ordering::Acquire),
            advances: self.shared.advances.load(Ordering::Acquire),
            simulation,
        };
        log::debug!(
            "tick scheduler stopped in {:?} ({} ticks, {} advances)",
            report.elapsed,
            report.ticks,
            report.advances
        );
        report
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            self.stop();
        }
    }
}

impl fmt::Debug for TickScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickScheduler")
            .field("state", &self.state())
            .field("period", &self.period())
            .field("stats", &self.stats())
            .finish()
    }
}
