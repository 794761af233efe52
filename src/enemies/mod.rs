//! Enemies module - the saucer and its AI.

mod ai;
mod components;
mod plugin;
mod spawning;

pub use ai::{clear_wrecked_saucers, saucer_ai, saucer_contacts};
pub use components::Saucer;
pub use plugin::EnemyPlugin;
pub use spawning::spawn_saucer;
