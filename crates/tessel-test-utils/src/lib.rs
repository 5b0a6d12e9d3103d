//! Test utilities and fixture rules for Tessel development.
//!
//! Provides [`grid_from_art`] for building grids from ASCII drawings,
//! [`transition_of`] / [`TransitionHarness`] for exercising a rule against a
//! hand-built neighbourhood, and the fixture rules in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tessel_core::{Attributes, Cell, Generation, Position, State};
use tessel_grid::Grid;
use tessel_rule::{CellContext, Rule, Transition};

/// Build a grid from an ASCII drawing.
///
/// One line per row; surrounding whitespace and blank lines are ignored.
/// `.` is state 0, `#` is state 1, and a digit is that state. The next
/// buffer baseline is 0.
///
/// # Panics
///
/// Panics on any other character or on ragged rows.
pub fn grid_from_art(art: &str) -> Grid {
    let rows: Vec<Vec<State>> = art
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.chars().map(art_state).collect())
        .collect();
    Grid::from_rows(rows, 0).expect("art must describe a rectangular grid")
}

fn art_state(ch: char) -> State {
    match ch {
        '.' => 0,
        '#' => 1,
        d => d
            .to_digit(10)
            .map(|v| v as State)
            .unwrap_or_else(|| panic!("unsupported grid art character {d:?}")),
    }
}

/// Render the current generation back into art (`.` for 0, digits
/// otherwise).
pub fn grid_to_art(grid: &Grid) -> String {
    grid.snapshot()
        .to_rows()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|s| if s == 0 { '.' } else { char::from(b'0' + s as u8) })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A cell with attributes, for neighbourhood fixtures.
pub fn cell_with(state: State, attrs: &[(&str, i64)]) -> Cell {
    let mut cell = Cell::new(Position::new(0, 0), state);
    cell.attributes = attrs
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect::<Attributes>();
    cell
}

/// Apply `rule` to a centre in `state` surrounded by plain neighbours
/// in `neighbours`, at generation 0 with seed 0.
pub fn transition_of(rule: &dyn Rule, state: State, neighbours: &[State]) -> Transition {
    let nbs: Vec<Cell> = neighbours.iter().map(|&s| Cell::new(Position::new(0, 0), s)).collect();
    TransitionHarness::new(Cell::new(Position::new(1, 1), state))
        .neighbours(nbs)
        .run(rule)
}

/// Builder for a single-cell rule invocation.
pub struct TransitionHarness {
    centre: Cell,
    neighbours: Vec<Cell>,
    generation: Generation,
    seed: u64,
}

impl TransitionHarness {
    pub fn new(centre: Cell) -> Self {
        Self {
            centre,
            neighbours: Vec::new(),
            generation: Generation(0),
            seed: 0,
        }
    }

    /// Neighbour positions are rewritten to be distinct from the centre
    /// and from each other.
    pub fn neighbours(mut self, cells: Vec<Cell>) -> Self {
        self.neighbours = cells
            .into_iter()
            .enumerate()
            .map(|(i, mut c)| {
                c.position = Position::new(100, i as u32);
                c
            })
            .collect();
        self
    }

    pub fn generation(mut self, generation: u64) -> Self {
        self.generation = Generation(generation);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn run(&self, rule: &dyn Rule) -> Transition {
        let refs: Vec<&Cell> = self.neighbours.iter().collect();
        let mut ctx = CellContext::new(&self.centre, &refs, self.generation, self.seed);
        rule.transition(&mut ctx)
    }
}
