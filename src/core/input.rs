//! Per-frame control signals and the keyboard bridge that fills them.

use bevy::prelude::*;

use super::states::{GameSet, GameState};

/// Discrete control signals for the current frame.
///
/// Gameplay only reads this resource, so anything (keyboard, tests, a bot)
/// can drive the ship by writing it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    /// -1.0 (full left) to 1.0 (full right)
    pub turn: f32,
    /// 0.0 to 1.0
    pub thrust: f32,
    /// Fire held
    pub fire: bool,
    /// Warp held
    pub warp: bool,
    /// Confirm pressed this frame
    pub confirm: bool,
}

/// Maps the keyboard onto [`ControlInput`].
pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, read_keyboard.before(GameSet::Input))
            .add_systems(
                Update,
                quit_from_menus
                    .run_if(in_state(GameState::MainMenu).or(in_state(GameState::GameOver))),
            );
    }
}

fn axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

/// Sample the keyboard once per frame.
fn read_keyboard(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<ControlInput>) {
    input.turn = axis(
        &keyboard,
        [KeyCode::ArrowLeft, KeyCode::KeyA],
        [KeyCode::ArrowRight, KeyCode::KeyD],
    );
    input.thrust = axis(
        &keyboard,
        [KeyCode::ArrowDown, KeyCode::KeyS],
        [KeyCode::ArrowUp, KeyCode::KeyW],
    )
    .max(0.0);
    input.fire = keyboard.pressed(KeyCode::Space);
    input.warp = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ShiftLeft]);
    input.confirm = keyboard.any_just_pressed([KeyCode::Enter, KeyCode::NumpadEnter]);
}

/// Escape leaves the game from the title and game-over screens.
fn quit_from_menus(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}
