//! Rock spawning.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use super::components::{Rock, RockPopulation};
use crate::config::RockConfig;
use crate::core::{BodyKind, ScreenWrap};
use crate::physics::dynamic_body;

/// Spawn one rock of `generation` at `position` with a random heading.
///
/// Returns `None` if the generation does not exist.
pub fn spawn_rock(
    commands: &mut Commands,
    config: &RockConfig,
    generation: usize,
    position: Vec2,
    rng: &mut impl Rng,
    population: &mut RockPopulation,
) -> Option<Entity> {
    let Some(stats) = config.generation(generation) else {
        warn!("No rock generation {}", generation);
        return None;
    };

    let heading = Quat::from_rotation_z(rng.gen_range(0.0..TAU));
    let entity = commands
        .spawn((
            Name::new(format!("Rock (generation {})", generation)),
            Rock::new(generation),
            BodyKind::Rock,
            ScreenWrap {
                padding: config.wrap_padding,
            },
            Transform::from_translation(position.extend(0.0)).with_rotation(heading),
            Visibility::default(),
            dynamic_body(stats.radius, config.linear_damping),
        ))
        .id();

    population.spawned();
    Some(entity)
}

/// Spawn the starting rocks on a ring around the origin.
pub fn spawn_rock_ring(
    commands: &mut Commands,
    config: &RockConfig,
    rng: &mut impl Rng,
    population: &mut RockPopulation,
) {
    for _ in 0..config.starting_count {
        let angle = rng.gen_range(0.0..TAU);
        let position = Vec2::from_angle(angle) * config.spawn_radius;
        spawn_rock(
            commands,
            config,
            config.starting_generation,
            position,
            rng,
            population,
        );
    }
}
