//! Rocks module - drifting obstacles that split when destroyed.

mod components;
mod plugin;
mod spawning;
mod systems;

pub use components::{Rock, RockPopulation, Shatter, SHATTER_DELAY_SECS};
pub use plugin::RockPlugin;
pub use spawning::{spawn_rock, spawn_rock_ring};
pub use systems::{clear_shattered_rocks, push_rocks, rock_contacts};
