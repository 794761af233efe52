//! Timed saucer spawning from the screen corners.

use std::ops::Range;

use bevy::prelude::*;
use rand::Rng;

use crate::config::GameConfig;
use crate::core::GameRng;
use crate::enemies::spawn_saucer;

/// Screen corner a saucer enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnCorner {
    SouthWest,
    NorthWest,
    NorthEast,
    SouthEast,
}

impl SpawnCorner {
    /// Same order as [`ScreenBounds::corners`](crate::core::ScreenBounds::corners).
    pub const ALL: [SpawnCorner; 4] = [
        SpawnCorner::SouthWest,
        SpawnCorner::NorthWest,
        SpawnCorner::NorthEast,
        SpawnCorner::SouthEast,
    ];

    pub fn index(self) -> usize {
        match self {
            SpawnCorner::SouthWest => 0,
            SpawnCorner::NorthWest => 1,
            SpawnCorner::NorthEast => 2,
            SpawnCorner::SouthEast => 3,
        }
    }

    /// Clockwise degrees from straight up that point into the play field.
    // NOTE: the north-east range starts at 190, leaving 180..190 unused.
    pub fn aim_range(self) -> Range<f32> {
        match self {
            SpawnCorner::SouthWest => 0.0..90.0,
            SpawnCorner::NorthWest => 90.0..180.0,
            SpawnCorner::NorthEast => 190.0..270.0,
            SpawnCorner::SouthEast => 270.0..360.0,
        }
    }
}

/// Repeating saucer countdown, alive only while playing.
#[derive(Resource, Debug)]
pub struct SaucerSpawner {
    pub timer: Timer,
    /// Screen corners cached when the game started
    pub corners: [Vec2; 4],
}

impl SaucerSpawner {
    pub fn new(seconds: f32, corners: [Vec2; 4]) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Repeating),
            corners,
        }
    }
}

/// Spawn a saucer from a random corner every time the countdown runs out.
pub fn tick_saucer_spawner(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut spawner: ResMut<SaucerSpawner>,
) {
    spawner.timer.tick(time.delta());

    for _ in 0..spawner.timer.times_finished_this_tick() {
        let corner = SpawnCorner::ALL[rng.0.gen_range(0..SpawnCorner::ALL.len())];
        let aim = rng.0.gen_range(corner.aim_range());
        spawn_saucer(
            &mut commands,
            &config.saucer,
            spawner.corners[corner.index()],
            aim,
            time.elapsed_secs_f64(),
        );
        info!("Saucer entering from {:?}", corner);
    }
}

/// Cancel the countdown so nothing spawns into a finished game.
pub fn stop_saucer_spawner(mut commands: Commands) {
    commands.remove_resource::<SaucerSpawner>();
}
