//! Score and lives for the running session.

use bevy::prelude::*;

use crate::config::{GameConfig, SessionConfig};

/// Score and lives, owned by the game coordinator.
///
/// Everything else only asks for changes through `ScoreEvent` and
/// `LifeLostEvent`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    pub score: u32,
    pub lives: i32,
    pub starting_score: u32,
    pub starting_lives: i32,
    /// Score of the game that just ended, shown on the game-over screen
    pub final_score: Option<u32>,
}

impl ScoreBoard {
    pub fn new(session: &SessionConfig) -> Self {
        Self {
            score: session.starting_score,
            lives: session.starting_lives,
            starting_score: session.starting_score,
            starting_lives: session.starting_lives,
            final_score: None,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Take away `lives`. Returns true when none are left.
    pub fn lose_life(&mut self, lives: i32) -> bool {
        self.lives -= lives;
        self.lives < 1
    }

    /// Record the final score and put everything back for the next game.
    pub fn finish(&mut self) -> u32 {
        let final_score = self.score;
        self.final_score = Some(final_score);
        self.score = self.starting_score;
        self.lives = self.starting_lives;
        final_score
    }
}

impl FromWorld for ScoreBoard {
    fn from_world(world: &mut World) -> Self {
        world
            .get_resource::<GameConfig>()
            .map(|config| Self::new(&config.session))
            .unwrap_or_else(|| Self::new(&SessionConfig::default()))
    }
}
