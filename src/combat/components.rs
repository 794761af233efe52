//! Projectile components.

use bevy::prelude::*;

use crate::config::BulletConfig;
use crate::core::BodyKind;
use crate::physics::{dynamic_body, facing};

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Player,
    Saucer,
}

impl Faction {
    /// Collision category of the faction's bullets.
    pub fn bullet_kind(self) -> BodyKind {
        match self {
            Faction::Player => BodyKind::PlayerBullet,
            Faction::Saucer => BodyKind::SaucerBullet,
        }
    }

    /// Whether touching `other` uses the projectile up.
    pub fn is_stopped_by(self, other: BodyKind) -> bool {
        match self {
            Faction::Player => matches!(other, BodyKind::Rock | BodyKind::Saucer),
            Faction::Saucer => other == BodyKind::Ship,
        }
    }
}

/// A bullet in flight.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub owner: Faction,
    /// Forward force requested every tick
    pub speed: f32,
}

/// Spawn a bullet at `position` travelling along `heading`.
pub fn spawn_projectile(
    commands: &mut Commands,
    config: &BulletConfig,
    owner: Faction,
    position: Vec2,
    heading: Vec2,
) -> Entity {
    commands
        .spawn((
            Name::new("Projectile"),
            Projectile {
                owner,
                speed: config.speed,
            },
            owner.bullet_kind(),
            Transform::from_translation(position.extend(0.0)).with_rotation(facing(heading)),
            Visibility::default(),
            dynamic_body(config.radius, 0.0),
        ))
        .id()
}
