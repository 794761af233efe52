use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Shared random source for every gameplay decision.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl GameRng {
    /// Deterministic source, for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}
