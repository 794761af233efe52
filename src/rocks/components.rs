//! Rock components and population bookkeeping.

use bevy::prelude::*;

/// Seconds a broken rock lingers before it is removed.
pub const SHATTER_DELAY_SECS: f32 = 0.2;

/// A drifting rock.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rock {
    /// Index into the configured rock generations
    pub generation: usize,
    /// Set on the first destroying contact; later contacts are ignored
    pub shattered: bool,
}

impl Rock {
    pub fn new(generation: usize) -> Self {
        Self {
            generation,
            shattered: false,
        }
    }
}

/// Countdown until a broken rock is removed.
#[derive(Component)]
pub struct Shatter(pub Timer);

impl Default for Shatter {
    fn default() -> Self {
        Self(Timer::from_seconds(SHATTER_DELAY_SECS, TimerMode::Once))
    }
}

/// Number of rocks alive, kept up to date by spawning and removal
/// instead of scanning the world.
#[derive(Resource, Debug, Default)]
pub struct RockPopulation {
    live: usize,
}

impl RockPopulation {
    pub fn count(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn spawned(&mut self) {
        self.live += 1;
    }

    pub fn removed(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    pub fn clear(&mut self) {
        self.live = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_never_underflows() {
        let mut population = RockPopulation::default();
        population.spawned();
        population.removed();
        population.removed();
        assert!(population.is_empty());
    }
}
