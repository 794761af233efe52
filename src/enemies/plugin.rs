//! Enemy plugin - registers all saucer systems.

use bevy::prelude::*;

use super::ai;
use crate::core::GameSet;

/// Enemy plugin - saucer flight, shooting and wreck removal.
///
/// When saucers appear is decided by the game coordinator.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, ai::saucer_ai.in_set(GameSet::Input))
            .add_systems(Update, ai::clear_wrecked_saucers.in_set(GameSet::Timers))
            .add_systems(Update, ai::saucer_contacts.in_set(GameSet::Contacts));
    }
}
