//! Projectile systems - propulsion, clean-up and contact handling.

use std::collections::HashSet;

use bevy::prelude::*;
use bevy_rapier2d::prelude::ExternalForce;

use super::components::Projectile;
use crate::config::GameConfig;
use crate::core::{Contact, GameSet, ScreenBounds};
use crate::physics::push_forward;

/// Configure projectile systems.
pub fn setup_combat_systems(app: &mut App) {
    app.add_systems(
        Update,
        (propel_projectiles, despawn_offscreen_projectiles)
            .chain()
            .in_set(GameSet::Movement),
    )
    .add_systems(Update, projectile_contacts.in_set(GameSet::Contacts));
}

/// Keep pushing every projectile along its heading.
pub fn propel_projectiles(
    mut query: Query<(&Projectile, &Transform, &mut ExternalForce)>,
) {
    for (projectile, transform, mut force) in query.iter_mut() {
        push_forward(&mut force, transform, projectile.speed);
    }
}

/// Remove projectiles that left the screen.
pub fn despawn_offscreen_projectiles(
    mut commands: Commands,
    bounds: Res<ScreenBounds>,
    config: Res<GameConfig>,
    query: Query<(Entity, &Transform), With<Projectile>>,
) {
    for (entity, transform) in query.iter() {
        if bounds.is_outside(transform.translation.truncate(), config.bullet.offscreen_padding) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Consume projectiles that hit something their faction stops on.
pub fn projectile_contacts(
    mut commands: Commands,
    mut contacts: EventReader<Contact>,
    query: Query<&Projectile>,
) {
    // A bullet can touch two bodies in one tick
    let mut consumed = HashSet::new();

    for contact in contacts.read() {
        let Ok(projectile) = query.get(contact.entity) else {
            continue;
        };
        if !projectile.owner.is_stopped_by(contact.other_kind) {
            continue;
        }
        if consumed.insert(contact.entity) {
            commands.entity(contact.entity).despawn_recursive();
        }
    }
}
