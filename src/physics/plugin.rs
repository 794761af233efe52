//! Physics plugin - turns rapier collision events into gameplay contacts.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::{BodyKind, Contact, GameSet};

/// Bridges rapier to the gameplay layer. Expects `RapierPhysicsPlugin` to be
/// added by the app.
pub struct PhysicsBridgePlugin;

impl Plugin for PhysicsBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            forward_collisions
                .after(GameSet::Movement)
                .before(GameSet::Contacts),
        );
    }
}

/// Send a [`Contact`] to each side of every new overlap.
fn forward_collisions(
    mut collisions: EventReader<CollisionEvent>,
    kinds: Query<&BodyKind>,
    mut contacts: EventWriter<Contact>,
) {
    for collision in collisions.read() {
        let CollisionEvent::Started(a, b, _) = *collision else {
            continue;
        };

        // Bodies despawned this frame have no kind left; skip them
        let (Ok(kind_a), Ok(kind_b)) = (kinds.get(a), kinds.get(b)) else {
            continue;
        };

        contacts.send(Contact {
            entity: a,
            other: b,
            other_kind: *kind_b,
        });
        contacts.send(Contact {
            entity: b,
            other: a,
            other_kind: *kind_a,
        });
    }
}
