use bevy::prelude::*;
use bevy_rapier2d::prelude::ExternalForce;

use super::components::{Craft, CraftStats};
use crate::core::GameSet;
use crate::physics::push_forward;

/// Shared craft systems.
pub struct CraftPlugin;

impl Plugin for CraftPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_craft_thrust.in_set(GameSet::Movement));
    }
}

/// Push every craft forward by `speed * accel_rate`.
pub fn apply_craft_thrust(mut query: Query<(&Craft, &CraftStats, &Transform, &mut ExternalForce)>) {
    for (craft, stats, transform, mut force) in query.iter_mut() {
        push_forward(&mut force, transform, stats.speed * craft.accel_rate);
    }
}
