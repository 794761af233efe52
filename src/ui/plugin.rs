//! UI plugin - title screen, HUD and game-over screen.

use bevy::prelude::*;

use super::hud;
use crate::core::GameState;
use crate::game::ScoreBoard;

/// UI plugin - handles all user interface.
///
/// Screens only display state; confirm and quit are handled by the input
/// bridge and the game coordinator.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup::<MainMenuUi>)

            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup::<GameOverUi>);
    }
}

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

/// Full-screen centred column.
fn screen_root() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

/// Helper to spawn one line of text with a gap below it.
fn spawn_line(parent: &mut ChildBuilder, text: impl Into<String>, size: f32, color: Color, gap: f32) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(gap)),
            ..default()
        },
    ));
}

/// Set up the title screen.
fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((screen_root(), MainMenuUi))
        .with_children(|parent| {
            spawn_line(parent, "ROCK RAIDERS", 80.0, Color::srgb(0.85, 0.85, 0.9), 50.0);
            spawn_line(
                parent,
                "Arrows turn and thrust, Space fires, Shift warps",
                22.0,
                Color::srgb(0.5, 0.5, 0.55),
                40.0,
            );
            spawn_line(parent, "Press Enter to start", 30.0, Color::srgb(1.0, 0.75, 0.35), 12.0);
            spawn_line(parent, "Esc to quit", 20.0, Color::srgb(0.5, 0.5, 0.55), 0.0);
        });
}

/// Set up the game over screen with the final score.
fn setup_game_over(mut commands: Commands, scoreboard: Res<ScoreBoard>) {
    let final_score = scoreboard.final_score.unwrap_or(scoreboard.score);

    commands
        .spawn((
            screen_root(),
            BackgroundColor(Color::srgba(0.1, 0.0, 0.0, 0.6)),
            GameOverUi,
        ))
        .with_children(|parent| {
            spawn_line(parent, "GAME OVER", 72.0, Color::srgb(1.0, 0.2, 0.15), 30.0);
            spawn_line(
                parent,
                format!("Final Score {}", final_score),
                36.0,
                Color::srgb(0.85, 0.85, 0.9),
                50.0,
            );
            spawn_line(parent, "Press Enter to play again", 26.0, Color::srgb(1.0, 0.75, 0.35), 0.0);
        });
}

/// Despawn every entity of one screen.
fn cleanup<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
