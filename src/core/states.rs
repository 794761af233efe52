//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Ship input is only
//! forwarded while `Playing`, and each screen of the UI lives exactly as long
//! as its state.

use bevy::prelude::*;

/// Top-level game states.
///
/// - Start in `MainMenu` and wait for confirm
/// - `Playing` spawns the ship and rocks and runs the saucer timer
/// - `GameOver` when the last life is lost; confirm starts a fresh game
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Title screen
    #[default]
    MainMenu,
    /// Active gameplay
    Playing,
    /// Out of lives, final score on screen
    GameOver,
}

/// System ordering inside one frame.
///
/// Movement always lands before contacts are resolved, and timers (shield
/// expiry in particular) fire before contacts so a hit on the expiry tick
/// already counts.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Timers,
    Movement,
    Contacts,
    Bookkeeping,
}
