//! Combat module - projectiles and what stops them.

mod components;
mod plugin;
mod systems;

pub use components::{spawn_projectile, Faction, Projectile};
pub use plugin::CombatPlugin;
pub use systems::{despawn_offscreen_projectiles, projectile_contacts, propel_projectiles};
