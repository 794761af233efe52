//! Player ship components.

use bevy::prelude::*;

use crate::config::ShipConfig;
use crate::core::{BodyKind, ScreenWrap};
use crate::craft::{Craft, CraftStats, ShieldTimer};
use crate::physics::dynamic_body;

/// Marker component for the player's ship.
#[derive(Component, Debug, Default)]
pub struct Ship;

/// Spawn the player's ship at the origin, pointing up, behind a fresh shield.
pub fn spawn_ship(commands: &mut Commands, config: &ShipConfig) -> Entity {
    commands
        .spawn((
            Name::new("Ship"),
            Ship,
            BodyKind::Ship,
            Craft::shielded(),
            CraftStats::from(config),
            ShieldTimer::new(config.shield_time),
            ScreenWrap {
                padding: config.wrap_padding,
            },
            Transform::default(),
            Visibility::default(),
            dynamic_body(config.radius, config.linear_damping),
        ))
        .id()
}
