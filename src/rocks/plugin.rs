//! Rock plugin.

use bevy::prelude::*;

use super::components::RockPopulation;
use super::systems::{clear_shattered_rocks, push_rocks, rock_contacts};
use crate::core::GameSet;

/// Rock plugin - movement, splitting and removal of rocks.
pub struct RockPlugin;

impl Plugin for RockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RockPopulation>()
            .add_systems(Update, clear_shattered_rocks.in_set(GameSet::Timers))
            .add_systems(Update, push_rocks.in_set(GameSet::Movement))
            .add_systems(Update, rock_contacts.in_set(GameSet::Contacts));
    }
}
