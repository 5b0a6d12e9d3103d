//! Benchmark profiles for the Tessel cellular automaton engine.
//!
//! Provides pre-built simulations for benchmarking:
//!
//! - [`life_profile`]: 100x100 Game of Life torus (10K cells)
//! - [`fire_profile`]: 100x100 probabilistic forest fire
//! - [`wator_profile`]: 100x100 Wa-Tor with attribute-carrying cells
//! - [`stress_profile`]: 316x316 Game of Life (~100K cells)
//! - [`init_states`]: deterministic initial states via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_core::{GridDims, Metadata, State};
use tessel_engine::{Registry, Simulation};

/// Generate deterministic initial states in `0..states` for a
/// `rows × cols` grid from a simple hash of the seed.
pub fn init_states(dims: GridDims, states: State, seed: u64) -> Vec<Vec<State>> {
    let mut rows = Vec::with_capacity(dims.rows as usize);
    for r in 0..dims.rows as u64 {
        let row = (0..dims.cols as u64)
            .map(|c| {
                let i = r * dims.cols as u64 + c;
                let h = seed
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(i.wrapping_mul(1442695040888963407));
                ((h >> 33) % states as u64) as State
            })
            .collect();
        rows.push(row);
    }
    rows
}

fn profile(size: u32, states: State, seed: u64, keys: &[(&str, &str)]) -> Simulation {
    let mut meta: Metadata = keys.iter().copied().collect();
    meta.insert("Seed", seed.to_string());
    meta.insert("EdgePolicy", "Wrap");
    Registry::standard()
        .load(&meta, init_states(GridDims::new(size, size), states, seed))
        .expect("benchmark profile must be valid")
}

/// 100x100 Game of Life on a torus.
pub fn life_profile(seed: u64) -> Simulation {
    profile(100, 2, seed, &[("Type", "GameOfLife")])
}

/// 100x100 forest fire with regrowth.
pub fn fire_profile(seed: u64) -> Simulation {
    profile(
        100,
        3,
        seed,
        &[
            ("Type", "FireSpread"),
            ("BurnProbability", "0.6"),
            ("GrowthProbability", "0.05"),
        ],
    )
}

/// 100x100 Wa-Tor.
pub fn wator_profile(seed: u64) -> Simulation {
    profile(
        100,
        3,
        seed,
        &[
            ("Type", "WaTor"),
            ("FishBreedAge", "3"),
            ("SharkBreedAge", "8"),
            ("SharkEnergy", "4"),
        ],
    )
}

/// 316x316 Game of Life (~100K cells).
pub fn stress_profile(seed: u64) -> Simulation {
    profile(316, 2, seed, &[("Type", "GameOfLife")])
}
