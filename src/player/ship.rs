//! Ship shield, damage and respawn.

use bevy::prelude::*;
use bevy_rapier2d::prelude::ColliderDisabled;

use super::components::Ship;
use crate::config::GameConfig;
use crate::core::{BodyKind, Contact, LifeLostEvent, ResetShipEvent, SoundCue, SoundEvent};
use crate::craft::{Craft, HitPhase, HitSequence, ShieldTimer};

/// Drop the shield of every craft whose shield time ran out.
pub fn expire_shields(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Craft, &mut ShieldTimer)>,
    mut sounds: EventWriter<SoundEvent>,
) {
    for (entity, mut craft, mut shield) in query.iter_mut() {
        if !shield.0.tick(time.delta()).just_finished() {
            continue;
        }

        craft.drop_shield();
        commands.entity(entity).remove::<ShieldTimer>();
        sounds.send(SoundCue::ShieldDown.into());
    }
}

/// True for the bodies that hurt the ship.
fn hurts_ship(kind: BodyKind) -> bool {
    match kind {
        BodyKind::Rock | BodyKind::Saucer | BodyKind::SaucerBullet => true,
        BodyKind::Ship | BodyKind::PlayerBullet => false,
    }
}

/// Start the hit sequence on a vulnerable ship that touched something
/// dangerous.
pub fn ship_contacts(
    mut commands: Commands,
    mut contacts: EventReader<Contact>,
    mut ships: Query<&mut Craft, With<Ship>>,
    mut lives: EventWriter<LifeLostEvent>,
    mut sounds: EventWriter<SoundEvent>,
) {
    for contact in contacts.read() {
        if !hurts_ship(contact.other_kind) {
            continue;
        }
        let Ok(mut craft) = ships.get_mut(contact.entity) else {
            continue;
        };
        // Covers a second contact in the same tick too
        if !craft.is_vulnerable() {
            continue;
        }

        craft.take_hit();
        commands.entity(contact.entity).insert(HitSequence::default());
        sounds.send(SoundCue::ShipHit.into());
        lives.send(LifeLostEvent { lives: 1 });
        debug!("Ship hit by {:?}", contact.other_kind);
    }
}

/// Walk a hit ship through vanishing and coming back.
pub fn advance_ship_hit(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut query: Query<(Entity, &mut Craft, &mut HitSequence, &mut Visibility), With<Ship>>,
    mut resets: EventWriter<ResetShipEvent>,
    mut sounds: EventWriter<SoundEvent>,
) {
    for (entity, mut craft, mut sequence, mut visibility) in query.iter_mut() {
        if !sequence.timer.tick(time.delta()).just_finished() {
            continue;
        }

        match sequence.phase {
            HitPhase::Exploding => {
                *visibility = Visibility::Hidden;
                commands.entity(entity).insert(ColliderDisabled);
                sequence.start_respawn(config.ship.respawn_rate);
            }
            HitPhase::Respawning => {
                *visibility = Visibility::Inherited;
                craft.raise_shield();
                craft.recover();
                commands
                    .entity(entity)
                    .remove::<(ColliderDisabled, HitSequence)>()
                    .insert(ShieldTimer::new(config.ship.shield_time));
                resets.send(ResetShipEvent);
                sounds.send(SoundCue::ShieldUp.into());
            }
        }
    }
}
