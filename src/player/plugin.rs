//! Player plugin - shield, damage and respawn for the ship.

use bevy::prelude::*;

use super::ship::{advance_ship_hit, expire_shields, ship_contacts};
use crate::core::GameSet;

/// Player plugin - ship behaviour that does not depend on input.
///
/// Input is forwarded to the ship by the game coordinator.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (expire_shields, advance_ship_hit).in_set(GameSet::Timers),
        )
        .add_systems(Update, ship_contacts.in_set(GameSet::Contacts));
    }
}
