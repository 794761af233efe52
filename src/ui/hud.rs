//! In-game HUD - score and lives display.

use bevy::prelude::*;

use crate::core::GameState;
use crate::game::ScoreBoard;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the score text.
#[derive(Component)]
pub struct ScoreText;

/// Marker for the lives text.
#[derive(Component)]
pub struct LivesText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_hud)
        .add_systems(OnExit(GameState::Playing), cleanup_hud)
        .add_systems(
            Update,
            update_hud
                .run_if(in_state(GameState::Playing))
                .run_if(resource_changed::<ScoreBoard>),
        );
}

fn score_label(scoreboard: &ScoreBoard) -> String {
    format!("Score {}", scoreboard.score)
}

fn lives_label(scoreboard: &ScoreBoard) -> String {
    format!("Lives {}", scoreboard.lives)
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, scoreboard: Res<ScoreBoard>) {
    // Top bar, score on the left and lives on the right
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(16.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(score_label(&scoreboard)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.9)),
                ScoreText,
            ));
            parent.spawn((
                Text::new(lives_label(&scoreboard)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.9)),
                LivesText,
            ));
        });
}

/// Refresh both labels from the scoreboard.
fn update_hud(
    scoreboard: Res<ScoreBoard>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<LivesText>)>,
    mut lives_query: Query<&mut Text, (With<LivesText>, Without<ScoreText>)>,
) {
    if let Ok(mut text) = score_query.get_single_mut() {
        text.0 = score_label(&scoreboard);
    }
    if let Ok(mut text) = lives_query.get_single_mut() {
        text.0 = lives_label(&scoreboard);
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
