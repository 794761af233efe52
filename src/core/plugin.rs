//! Core plugin that sets up game states, events, and shared resources.

use bevy::prelude::*;

use super::bounds::{wrap_at_edges, ScreenBounds};
use super::events::*;
use super::input::ControlInput;
use super::random::GameRng;
use super::states::*;
use crate::config::GameConfig;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (MainMenu, Playing, GameOver)
/// - Frame ordering sets
/// - Global events (Contact, ScoreEvent, LifeLostEvent, ...)
/// - Config, bounds, input and RNG resources
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // An already inserted config (tests, tools) wins over the data file
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::load());
        }

        app
            // Initialize game states
            .init_state::<GameState>()

            .configure_sets(
                Update,
                (
                    GameSet::Input,
                    GameSet::Timers,
                    GameSet::Movement,
                    GameSet::Contacts,
                    GameSet::Bookkeeping,
                )
                    .chain(),
            )

            // Register global events
            .add_event::<Contact>()
            .add_event::<ScoreEvent>()
            .add_event::<LifeLostEvent>()
            .add_event::<ResetShipEvent>()
            .add_event::<SoundEvent>()

            // Shared resources (keeps anything inserted beforehand)
            .init_resource::<ScreenBounds>()
            .init_resource::<ControlInput>()
            .init_resource::<GameRng>()

            // Edge wrapping for ships and rocks
            .add_systems(Update, wrap_at_edges.in_set(GameSet::Movement));
    }
}
