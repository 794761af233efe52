//! Game plugin - the coordinator that owns state, score and population.

use bevy::prelude::*;

use super::flow;
use super::saucer_spawn::{stop_saucer_spawner, tick_saucer_spawner, SaucerSpawner};
use super::scoreboard::ScoreBoard;
use crate::core::{GameSet, GameState};

/// Game plugin - moves between menu, play and game over.
///
/// Only these systems write the [`ScoreBoard`] or change [`GameState`].
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoreBoard>()
            // Start and end of a game
            .add_systems(OnEnter(GameState::Playing), flow::start_game)
            .add_systems(OnExit(GameState::Playing), stop_saucer_spawner)
            .add_systems(OnEnter(GameState::GameOver), flow::end_game)
            // Confirm on the menus
            .add_systems(
                Update,
                flow::start_from_menu
                    .in_set(GameSet::Input)
                    .run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(
                Update,
                flow::restart_from_game_over
                    .in_set(GameSet::Input)
                    .run_if(in_state(GameState::GameOver)),
            )
            // Playing
            .add_systems(
                Update,
                flow::forward_input_to_ship
                    .in_set(GameSet::Input)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                tick_saucer_spawner
                    .in_set(GameSet::Timers)
                    .run_if(in_state(GameState::Playing))
                    .run_if(resource_exists::<SaucerSpawner>),
            )
            .add_systems(
                Update,
                // Intents are drained in every state but only count while playing
                (
                    flow::apply_score_events,
                    flow::apply_life_events,
                    (flow::reset_ship_position, flow::maintain_rock_population)
                        .run_if(in_state(GameState::Playing)),
                )
                    .chain()
                    .in_set(GameSet::Bookkeeping),
            );
    }
}
