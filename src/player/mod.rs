//! Player module - the ship entity and its damage cycle.

mod components;
mod plugin;
mod ship;

pub use components::{spawn_ship, Ship};
pub use plugin::PlayerPlugin;
pub use ship::{advance_ship_hit, expire_shields, ship_contacts};
