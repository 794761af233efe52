//! Rigid body template shared by every moving entity.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Rapier components for a drifting sensor ball.
///
/// Everything in the game is a sensor: bodies never bounce off each other,
/// they only report overlaps. Colliders carry no mass of their own and the
/// body gets a fixed mass of 1, so a force of `n` always means an
/// acceleration of `n`, whatever the radius and even with the collider off.
pub fn dynamic_body(radius: f32, linear_damping: f32) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::ball(radius),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ColliderMassProperties::Density(0.0),
        AdditionalMassProperties::Mass(1.0),
        GravityScale(0.0),
        LockedAxes::ROTATION_LOCKED,
        Damping {
            linear_damping,
            angular_damping: 0.0,
        },
        ExternalForce::default(),
        Velocity::zero(),
    )
}

/// Unit vector the entity is pointing along (local +Y).
pub fn heading(transform: &Transform) -> Vec2 {
    transform.up().truncate()
}

/// Rotation that points local +Y along `direction`. A zero vector points up.
pub fn facing(direction: Vec2) -> Quat {
    Quat::from_rotation_z((-direction.x).atan2(direction.y))
}

/// Ask the physics host for a forward push of `magnitude` this tick.
pub fn push_forward(force: &mut ExternalForce, transform: &Transform, magnitude: f32) {
    force.force = heading(transform) * magnitude;
}
