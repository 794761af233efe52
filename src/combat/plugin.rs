//! Combat plugin - projectiles fired by the ship and by saucers.

use bevy::prelude::*;

use super::systems;

/// Combat plugin - handles every projectile in flight.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_combat_systems(app);
    }
}
