//! Saucer spawning.

use bevy::prelude::*;

use super::components::Saucer;
use crate::config::SaucerConfig;
use crate::core::{BodyKind, ScreenWrap};
use crate::craft::{Craft, CraftStats};
use crate::physics::dynamic_body;

/// Spawn a saucer at `position`, turned clockwise from straight up by
/// `aim_degrees`. Its first shot comes one `fire_rate` after `now`.
pub fn spawn_saucer(
    commands: &mut Commands,
    config: &SaucerConfig,
    position: Vec2,
    aim_degrees: f32,
    now: f64,
) -> Entity {
    let craft = Craft {
        next_fire: now + f64::from(config.fire_rate),
        ..default()
    };

    commands
        .spawn((
            Name::new("Saucer"),
            Saucer,
            BodyKind::Saucer,
            craft,
            CraftStats::from(config),
            ScreenWrap {
                padding: config.wrap_padding,
            },
            Transform::from_translation(position.extend(0.0))
                .with_rotation(Quat::from_rotation_z(-aim_degrees.to_radians())),
            Visibility::default(),
            dynamic_body(config.radius, config.linear_damping),
        ))
        .id()
}
