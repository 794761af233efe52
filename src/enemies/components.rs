//! Saucer components.

use bevy::prelude::*;

/// Marker component for the hostile saucer.
///
/// Saucers share [`Craft`](crate::craft::Craft) with the ship but never
/// raise a shield and never respawn.
#[derive(Component, Debug, Default)]
pub struct Saucer;
