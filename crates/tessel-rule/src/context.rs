//! Execution context passed to a rule for one cell.
//!
//! [`CellContext`] holds the cell, its resolved neighbours (both borrowed
//! from the current generation), the generation number, and a lazily
//! created RNG seeded from `(simulation seed, generation, position)`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::{Cell, Generation, Position, State};

/// Everything a [`Rule`](crate::Rule) may read while computing one cell.
pub struct CellContext<'a> {
    cell: &'a Cell,
    neighbours: &'a [&'a Cell],
    generation: Generation,
    seed: u64,
    rng: Option<ChaCha8Rng>,
}

impl<'a> CellContext<'a> {
    /// Construct a context.
    ///
    /// Typically called by the engine, not by rules directly.
    pub fn new(
        cell: &'a Cell,
        neighbours: &'a [&'a Cell],
        generation: Generation,
        seed: u64,
    ) -> Self {
        Self {
            cell,
            neighbours,
            generation,
            seed,
            rng: None,
        }
    }

    /// The cell being updated.
    pub fn cell(&self) -> &'a Cell {
        self.cell
    }

    /// Current state of the cell being updated.
    pub fn state(&self) -> State {
        self.cell.state
    }

    /// Position of the cell being updated.
    pub fn position(&self) -> Position {
        self.cell.position
    }

    /// Current-generation neighbours, as resolved by the simulation's
    /// pattern.
    pub fn neighbours(&self) -> &'a [&'a Cell] {
        self.neighbours
    }

    /// Number of neighbours in `state`.
    pub fn count_state(&self, state: State) -> usize {
        self.count_where(|c| c.state == state)
    }

    /// Number of neighbours matching `pred`.
    pub fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> usize {
        self.neighbours.iter().filter(|c| pred(c)).count()
    }

    /// The generation being read.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Deterministic RNG for this cell and generation.
    ///
    /// Two contexts for the same seed, generation and position produce the
    /// same stream, whatever else happened in the pass.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        let seed = cell_seed(self.seed, self.generation, self.cell.position);
        self.rng.get_or_insert_with(|| ChaCha8Rng::seed_from_u64(seed))
    }

    /// `true` with probability `p`. `p` must lie in `[0, 1]`.
    pub fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.rng().random_bool(p)
    }

    /// A uniformly chosen neighbour matching `pred`, if any.
    pub fn choose_neighbour(&mut self, pred: impl Fn(&Cell) -> bool) -> Option<&'a Cell> {
        let candidates: Vec<&'a Cell> = self
            .neighbours
            .iter()
            .copied()
            .filter(|c| pred(c))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let idx = self.rng().random_range(0..candidates.len());
        Some(candidates[idx])
    }
}

/// SplitMix64 finaliser.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn cell_seed(seed: u64, generation: Generation, pos: Position) -> u64 {
    let packed = (u64::from(pos.row) << 32) | u64::from(pos.col);
    mix(mix(seed ^ mix(generation.0)) ^ packed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cells(states: &[State]) -> Vec<Cell> {
        states
            .iter()
            .enumerate()
            .map(|(i, &s)| Cell::new(Position::new(0, i as u32 + 1), s))
            .collect()
    }

    #[test]
    fn counts_neighbour_states() {
        let centre = Cell::new(Position::new(0, 0), 0);
        let nbs = cells(&[1, 1, 0, 2, 1]);
        let refs: Vec<&Cell> = nbs.iter().collect();
        let ctx = CellContext::new(&centre, &refs, Generation(0), 1);
        assert_eq!(ctx.count_state(1), 3);
        assert_eq!(ctx.count_state(2), 1);
        assert_eq!(ctx.count_where(|c| c.state != 0), 4);
        assert_eq!(ctx.neighbours().len(), 5);
    }

    #[test]
    fn rng_is_reproducible_per_cell() {
        let centre = Cell::new(Position::new(3, 4), 0);
        let draw = |generation: u64| {
            let mut ctx = CellContext::new(&centre, &[], Generation(generation), 99);
            ctx.rng().random::<u64>()
        };
        assert_eq!(draw(5), draw(5));
        assert_ne!(draw(5), draw(6));
    }

    #[test]
    fn chance_extremes_skip_rng() {
        let centre = Cell::new(Position::new(0, 0), 0);
        let mut ctx = CellContext::new(&centre, &[], Generation(0), 0);
        assert!(!ctx.chance(0.0));
        assert!(ctx.chance(1.0));
    }

    #[test]
    fn choose_neighbour_respects_predicate() {
        let centre = Cell::new(Position::new(0, 0), 0);
        let nbs = cells(&[1, 2, 2, 0]);
        let refs: Vec<&Cell> = nbs.iter().collect();
        let mut ctx = CellContext::new(&centre, &refs, Generation(2), 7);
        let picked = ctx.choose_neighbour(|c| c.state == 2).unwrap();
        assert_eq!(picked.state, 2);
        assert!(ctx.choose_neighbour(|c| c.state == 9).is_none());
    }

    proptest! {
        #[test]
        fn distinct_positions_get_distinct_seeds(
            seed in any::<u64>(),
            generation in 0u64..1000,
            r in 0u32..512,
            c in 0u32..512,
        ) {
            let a = cell_seed(seed, Generation(generation), Position::new(r, c));
            let b = cell_seed(seed, Generation(generation), Position::new(r, c + 1));
            prop_assert_ne!(a, b);
        }
    }
}
