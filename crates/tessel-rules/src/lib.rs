//! Reference cellular automaton rules for Tessel.
//!
//! Each rule is an independent implementation of
//! [`Rule`](tessel_rule::Rule) and [`ConfiguredRule`](tessel_rule::ConfiguredRule):
//!
//! | Type name      | States                         | Required keys |
//! |----------------|--------------------------------|---------------|
//! | `GameOfLife`   | 0 dead, 1 alive                | none |
//! | `LifeLike`     | 0 dead, 1 alive                | `Rule` |
//! | `Segregation`  | 0 empty, 1/2 agents            | `Satisfied` |
//! | `Percolation`  | 0 blocked, 1 open, 2 full      | none |
//! | `FireSpread`   | 0 empty, 1 tree, 2 burning     | `BurnProbability` |
//! | `WaTor`        | 0 water, 1 fish, 2 shark       | `FishBreedAge`, `SharkBreedAge`, `SharkEnergy` |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fire_spread;
pub mod game_of_life;
pub mod life_like;
pub mod percolation;
pub mod segregation;
pub mod wator;

pub use fire_spread::FireSpread;
pub use game_of_life::GameOfLife;
pub use life_like::LifeLike;
pub use percolation::Percolation;
pub use segregation::Segregation;
pub use wator::WaTor;
