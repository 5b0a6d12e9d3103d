//! Tick loop and command channel draining for the [`TickScheduler`].
//!
//! The tick thread owns the attached [`Simulation`] exclusively (moved in
//! over a bounded crossbeam channel). Control flags are atomics shared with
//! the handle, so `pause()` and `set_period()` never wait on an advance.
//!
//! [`TickScheduler`]: crate::TickScheduler

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use crate::ring::SnapshotRing;
use crate::simulation::Simulation;

/// Requests from the scheduler handle to the tick thread.
pub(crate) enum TickCommand {
    /// Replace the attached simulation (the previous one is dropped).
    Attach(Box<Simulation>),
    /// Hand the attached simulation back.
    Detach {
        reply: Sender<Option<Simulation>>,
    },
}

/// State shared between the handle and the tick thread.
#[derive(Debug)]
pub(crate) struct SharedState {
    pub shutdown: AtomicBool,
    pub paused: AtomicBool,
    pub period_nanos: AtomicU64,
    pub tick_stopped: AtomicBool,
    pub ticks: AtomicU64,
    pub advances: AtomicU64,
    pub generation: AtomicU64,
    pub attached: AtomicBool,
}

impl SharedState {
    pub fn new(period: Duration, paused: bool) -> Self {
        Self {
            shutdown: AtomicBool::new(false),
            paused: AtomicBool::new(paused),
            period_nanos: AtomicU64::new(duration_nanos(period)),
            tick_stopped: AtomicBool::new(false),
            ticks: AtomicU64::new(0),
            advances: AtomicU64::new(0),
            generation: AtomicU64::new(0),
            attached: AtomicBool::new(false),
        }
    }

    pub fn period(&self) -> Duration {
        Duration::from_nanos(self.period_nanos.load(Ordering::Acquire))
    }
}

pub(crate) fn duration_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    simulation: Option<Simulation>,
    ring: Arc<SnapshotRing>,
    cmd_rx: Receiver<TickCommand>,
    shared: Arc<SharedState>,
}

impl TickThreadState {
    pub fn new(
        ring: Arc<SnapshotRing>,
        cmd_rx: Receiver<TickCommand>,
        shared: Arc<SharedState>,
    ) -> Self {
        Self {
            simulation: None,
            ring,
            cmd_rx,
            shared,
        }
    }

    /// Main tick loop. Runs until the shutdown flag is set.
    ///
    /// Consumes self and returns the attached simulation (if any) so the
    /// handle can recover it via `JoinHandle<Option<Simulation>>`.
    pub fn run(mut self) -> Option<Simulation> {
        let mut last_tick = Instant::now();
        loop {
            if self.shared.shutdown.load(Ordering::Acquire) {
                break;
            }

            // 1. Drain command channel.
            self.drain_command_channel();

            // 2. Tick if due. The period is re-read every iteration so a
            //    change applies to the next tick.
            let due = last_tick + self.shared.period();
            let now = Instant::now();
            if now >= due {
                self.tick();
                last_tick = now;
                continue;
            }

            // 3. Sleep for the remaining budget. park_timeout rather than
            //    sleep, so unpark() from the handle wakes us immediately.
            thread::park_timeout(due - now);
        }

        self.shared.tick_stopped.store(true, Ordering::Release);
        log::debug!(
            "tick thread stopped after {} ticks",
            self.shared.ticks.load(Ordering::Relaxed)
        );
        self.simulation
    }

    fn drain_command_channel(&mut self) {
        while let Ok(cmd) = self.cmd_rx.try_recv() {
            match cmd {
                TickCommand::Attach(sim) => self.attach(*sim),
                TickCommand::Detach { reply } => {
                    let sim = self.simulation.take();
                    self.shared.attached.store(false, Ordering::Release);
                    // Best-effort reply: the caller may have gone away.
                    let _ = reply.send(sim);
                }
            }
        }
    }

    fn attach(&mut self, sim: Simulation) {
        if let Some(old) = self.simulation.take() {
            log::info!(
                "replacing attached {} simulation at generation {}",
                old.type_name(),
                old.generation()
            );
        }
        log::info!(
            "attached {} simulation ({} grid)",
            sim.type_name(),
            sim.grid().dims()
        );
        self.shared.attached.store(true, Ordering::Release);
        publish(&self.ring, &self.shared, &sim);
        self.simulation = Some(sim);
    }

    fn tick(&mut self) {
        self.shared.ticks.fetch_add(1, Ordering::AcqRel);
        if self.shared.paused.load(Ordering::Acquire) {
            return;
        }
        let Some(sim) = self.simulation.as_mut() else {
            return;
        };
        sim.advance();
        self.shared.advances.fetch_add(1, Ordering::AcqRel);
        publish(&self.ring, &self.shared, sim);
    }
}

/// Push a snapshot of `sim` and record its generation.
fn publish(ring: &SnapshotRing, shared: &SharedState, sim: &Simulation) {
    ring.push(sim.snapshot());
    shared.generation.store(sim.generation().0, Ordering::Release);
}
