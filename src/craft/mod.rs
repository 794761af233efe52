//! Craft module - movement, firing and hit machinery shared by the player
//! ship and the saucer.

mod components;
mod systems;

pub use components::*;
pub use systems::{apply_craft_thrust, CraftPlugin};
