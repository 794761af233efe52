//! Rock Raiders - a 2D asteroid shooter in Bevy.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, frame ordering, intent events, screen bounds
//! - **Config**: Gameplay tuning read from RON
//! - **Craft**: Movement, shooting, shield and hit state shared by ship and saucer
//! - **Player**: The ship's shield, damage and respawn
//! - **Enemies**: Saucer flight, aim and removal
//! - **Rocks**: Drifting rocks that split when broken
//! - **Combat**: Projectiles
//! - **Game**: The coordinator - state machine, scoreboard, population, saucer timer
//! - **Physics**: Rapier bodies and the collision bridge
//! - **Audio**, **Rendering**, **UI**: thin host adapters
//!
//! [`GameplayPlugin`] holds every game rule and runs headless.
//! [`RockRaidersPlugin`] adds the window-facing adapters on top.

pub mod audio;
pub mod combat;
pub mod config;
pub mod core;
pub mod craft;
pub mod enemies;
pub mod game;
pub mod physics;
pub mod player;
pub mod rendering;
pub mod rocks;
pub mod ui;

use bevy::prelude::*;

/// Every gameplay rule, without rendering, audio, physics stepping or
/// keyboard input.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Entity behaviour
            .add_plugins((
                craft::CraftPlugin,
                player::PlayerPlugin,
                enemies::EnemyPlugin,
                rocks::RockPlugin,
                combat::CombatPlugin,
            ))

            // Coordinator
            .add_plugins(game::GamePlugin);
    }
}

/// Main game plugin that adds all sub-plugins.
///
/// Expects `DefaultPlugins`, `RapierPhysicsPlugin` and
/// `bevy_kira_audio::AudioPlugin` to be added by the app.
pub struct RockRaidersPlugin;

impl Plugin for RockRaidersPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(GameplayPlugin)

            // Host adapters
            .add_plugins((
                core::KeyboardInputPlugin,
                physics::PhysicsBridgePlugin,
                audio::SfxPlugin,
                rendering::RenderingPlugin,
                ui::UiPlugin,
            ));
    }
}
