//! The [`Simulation`]: one grid, one pattern, one rule.
//!
//! A simulation composes a [`Grid`], a [`NeighborhoodPattern`] and a
//! [`Rule`] for its whole lifetime. [`Simulation::advance`] runs one pass:
//! every cell's transition is computed from the current generation and
//! written into the next buffer, then the buffers swap in one operation.
//!
//! # Lifecycle
//!
//! `Constructed → Ready → (Updating → Ready)* → Disposed`. Construction is
//! the only fallible step; `advance()` cannot fail. Disposal is `Drop`.

use std::fmt;
use std::time::Instant;

use tessel_core::{Generation, GridDims, Position, SimulationError, State};
use tessel_grid::{Grid, GridSnapshot};
use tessel_rule::{CellContext, Rule};
use tessel_space::NeighborhoodPattern;

use crate::metrics::AdvanceMetrics;

/// A running cellular automaton.
pub struct Simulation {
    type_name: String,
    grid: Grid,
    pattern: Box<dyn NeighborhoodPattern>,
    rule: Box<dyn Rule>,
    seed: u64,
    last_advance: AdvanceMetrics,
}

impl Simulation {
    /// Compose a simulation.
    ///
    /// Returns `Err(SimulationError::MalformedInput)` if any cell, or the
    /// grid's next-buffer baseline, holds a state the rule does not accept.
    pub fn new(
        type_name: impl Into<String>,
        grid: Grid,
        pattern: Box<dyn NeighborhoodPattern>,
        rule: Box<dyn Rule>,
        seed: u64,
    ) -> Result<Self, SimulationError> {
        if let Some(bad) = grid.cells().find(|c| !rule.accepts(c.state)) {
            return Err(SimulationError::MalformedInput {
                reason: format!(
                    "state {} at {} is not valid for {}",
                    bad.state,
                    bad.position,
                    rule.name()
                ),
            });
        }
        if !rule.accepts(grid.baseline()) {
            return Err(SimulationError::MalformedInput {
                reason: format!(
                    "baseline state {} is not valid for {}",
                    grid.baseline(),
                    rule.name()
                ),
            });
        }
        let type_name = type_name.into();
        log::debug!(
            "built {type_name} simulation: {} grid, {} {} pattern, seed {seed}",
            grid.dims(),
            pattern.edge_behavior(),
            pattern.name(),
        );
        Ok(Self {
            type_name,
            last_advance: AdvanceMetrics {
                generation: grid.generation(),
                ..AdvanceMetrics::default()
            },
            grid,
            pattern,
            rule,
            seed,
        })
    }

    // ── Advancing ───────────────────────────────────────────────

    /// Advance one generation, visiting cells in row-major order.
    pub fn advance(&mut self) {
        let dims = self.grid.dims();
        self.run_pass(dims.positions());
    }

    /// Advance one generation, visiting cells in the given order.
    ///
    /// The result is identical for every order.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not a permutation of the grid's positions.
    pub fn advance_visiting(&mut self, order: &[Position]) {
        assert_permutation(self.grid.dims(), order);
        self.run_pass(order.iter().copied());
    }

    /// Advance `n` generations.
    pub fn advance_by(&mut self, n: u64) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn run_pass(&mut self, order: impl Iterator<Item = Position>) {
        let start = Instant::now();
        let pattern = self.pattern.as_ref();
        let rule = self.rule.as_ref();
        let seed = self.seed;

        let (current, mut next) = self.grid.split_pass();
        let generation = current.generation();
        for pos in order {
            let neighbours = current.neighbours(pos, pattern);
            let mut ctx = CellContext::new(current.cell(pos), &neighbours, generation, seed);
            let t = rule.transition(&mut ctx);
            next.write_cell(pos, t.state, t.attributes);
        }
        let cells_written = next.written();

        self.grid.advance_generation();
        self.last_advance = AdvanceMetrics {
            duration: start.elapsed(),
            cells_written,
            generation: self.grid.generation(),
        };
        log::trace!(
            "{} advanced to generation {} in {:?}",
            self.type_name,
            self.last_advance.generation,
            self.last_advance.duration
        );
    }

    // ── Editing ─────────────────────────────────────────────────

    /// Paint a current-generation cell between passes.
    ///
    /// Returns `Err(SimulationError::MalformedInput)` for a state the rule
    /// does not accept or a position outside the grid.
    pub fn set_cell(&mut self, pos: Position, state: State) -> Result<(), SimulationError> {
        if !self.grid.dims().contains(pos) {
            return Err(SimulationError::MalformedInput {
                reason: format!("position {pos} outside {} grid", self.grid.dims()),
            });
        }
        if !self.rule.accepts(state) {
            return Err(SimulationError::MalformedInput {
                reason: format!("state {state} is not valid for {}", self.rule.name()),
            });
        }
        self.grid.set_current(pos, state);
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Independent copy of the current generation.
    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// The owned grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The owned neighbourhood pattern.
    pub fn pattern(&self) -> &dyn NeighborhoodPattern {
        self.pattern.as_ref()
    }

    /// The owned rule.
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// The rule's default state.
    pub fn default_value(&self) -> State {
        self.rule.default_state()
    }

    /// Registry name this simulation was built under.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Seed for probabilistic rules.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current generation.
    pub fn generation(&self) -> Generation {
        self.grid.generation()
    }

    /// Metrics from the most recent advance.
    pub fn last_advance(&self) -> &AdvanceMetrics {
        &self.last_advance
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("type_name", &self.type_name)
            .field("dims", &self.grid.dims())
            .field("generation", &self.grid.generation())
            .field("pattern", &self.pattern.name())
            .field("edge", &self.pattern.edge_behavior())
            .field("seed", &self.seed)
            .finish()
    }
}

fn assert_permutation(dims: GridDims, order: &[Position]) {
    assert_eq!(
        order.len(),
        dims.cell_count(),
        "visit order has {} positions, grid {dims} has {}",
        order.len(),
        dims.cell_count()
    );
    let mut seen = vec![false; dims.cell_count()];
    for &pos in order {
        let idx = dims.index_of(pos);
        assert!(!seen[idx], "position {pos} visited twice");
        seen[idx] = true;
    }
}
