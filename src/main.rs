//! Rock Raiders - Entry Point
//!
//! A 2D asteroid shooter.
//!
//! Controls:
//! - Left/Right or A/D: Turn
//! - Up or W: Thrust
//! - Space: Fire
//! - Left Shift or Left Ctrl: Warp
//! - Enter: Start / play again
//! - Escape: Quit from the menus

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins; sound goes through kira instead of bevy_audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Rock Raiders".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Audio
        .add_plugins(bevy_kira_audio::AudioPlugin)

        // Our game plugin
        .add_plugins(rock_raiders::RockRaidersPlugin)

        .run();
}
