//! Gameplay tuning loaded from `assets/data/game_config.ron`.
//!
//! Allows tweaking every speed, cooldown and score value without
//! recompilation. Missing sections fall back to their defaults.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Player ship tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipConfig {
    /// Forward force at full thrust
    pub speed: f32,
    /// Degrees turned per tick at full stick
    pub turn_speed: f32,
    /// Seconds between shots
    pub fire_rate: f32,
    /// Seconds the ship stays gone after being hit
    pub respawn_rate: f32,
    /// Seconds of shield after every (re)spawn
    pub shield_time: f32,
    /// Seconds between warps
    pub warp_cooldown: f32,
    pub radius: f32,
    pub linear_damping: f32,
    /// How far past an edge the ship may drift before wrapping
    pub wrap_padding: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            speed: 8.0,
            turn_speed: 4.0,
            fire_rate: 0.5,
            respawn_rate: 1.0,
            shield_time: 3.0,
            warp_cooldown: 0.5,
            radius: 0.35,
            linear_damping: 1.0,
            wrap_padding: 1.0,
        }
    }
}

/// Saucer tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct SaucerConfig {
    pub speed: f32,
    /// Seconds between shots
    pub fire_rate: f32,
    /// Points for shooting one down
    pub score: u32,
    pub radius: f32,
    pub linear_damping: f32,
    /// How far past an edge the saucer may fly before wrapping
    pub wrap_padding: f32,
}

impl Default for SaucerConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            fire_rate: 1.5,
            score: 200,
            radius: 0.4,
            linear_damping: 1.0,
            wrap_padding: 1.0,
        }
    }
}

/// Projectile tuning, shared by both factions.
#[derive(Debug, Clone, Deserialize)]
pub struct BulletConfig {
    pub speed: f32,
    pub radius: f32,
    /// How far past the screen edge a bullet may travel before it is removed
    pub offscreen_padding: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 30.0,
            radius: 0.08,
            offscreen_padding: 1.0,
        }
    }
}

/// One size class of rock.
#[derive(Debug, Clone, Deserialize)]
pub struct RockGeneration {
    pub radius: f32,
    pub speed: f32,
    /// Rocks spawned when this one breaks
    pub children: u32,
    /// Points for breaking it
    pub score: u32,
    /// Index of the generation the children belong to; `None` is terminal
    #[serde(default)]
    pub child: Option<usize>,
}

/// Rock population tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct RockConfig {
    /// Largest first; a child index must point further down the list
    pub generations: Vec<RockGeneration>,
    pub starting_generation: usize,
    /// Rocks spawned at game start and whenever the field is empty
    pub starting_count: u32,
    /// Radius of the ring the starting rocks are placed on
    pub spawn_radius: f32,
    /// How far past an edge a rock may drift before wrapping
    pub wrap_padding: f32,
    pub linear_damping: f32,
}

impl Default for RockConfig {
    fn default() -> Self {
        Self {
            generations: vec![
                RockGeneration {
                    radius: 0.9,
                    speed: 1.0,
                    children: 2,
                    score: 20,
                    child: Some(1),
                },
                RockGeneration {
                    radius: 0.55,
                    speed: 1.5,
                    children: 2,
                    score: 50,
                    child: Some(2),
                },
                RockGeneration {
                    radius: 0.3,
                    speed: 2.0,
                    children: 0,
                    score: 100,
                    child: None,
                },
            ],
            starting_generation: 0,
            starting_count: 4,
            spawn_radius: 4.0,
            wrap_padding: 1.0,
            linear_damping: 1.0,
        }
    }
}

impl RockConfig {
    pub fn generation(&self, index: usize) -> Option<&RockGeneration> {
        self.generations.get(index)
    }
}

/// Per-session values the scoreboard starts from.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub starting_score: u32,
    pub starting_lives: i32,
    /// Seconds between saucer spawns
    pub saucer_spawn_rate: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_score: 0,
            starting_lives: 3,
            saucer_spawn_rate: 10.0,
        }
    }
}

/// Complete gameplay configuration.
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ship: ShipConfig,
    pub saucer: SaucerConfig,
    pub bullet: BulletConfig,
    pub rocks: RockConfig,
    pub session: SessionConfig,
}

impl GameConfig {
    /// Load from [`CONFIG_PATH`], falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::from_path(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(ConfigError::Read { path, details }) => {
                warn!("Could not read {}: {}. Using defaults.", path, details);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(&contents, &path.display().to_string())
    }

    /// Parse and validate config text; `origin` only labels errors.
    pub fn from_ron_str(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants gameplay relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("ship.speed", self.ship.speed),
            ("ship.fire_rate", self.ship.fire_rate),
            ("ship.respawn_rate", self.ship.respawn_rate),
            ("ship.shield_time", self.ship.shield_time),
            ("ship.warp_cooldown", self.ship.warp_cooldown),
            ("ship.radius", self.ship.radius),
            ("saucer.fire_rate", self.saucer.fire_rate),
            ("saucer.radius", self.saucer.radius),
            ("bullet.speed", self.bullet.speed),
            ("bullet.radius", self.bullet.radius),
            ("session.saucer_spawn_rate", self.session.saucer_spawn_rate),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field });
            }
        }

        if self.session.starting_lives < 1 {
            return Err(ConfigError::NoLives);
        }

        if self.rocks.starting_count == 0 {
            return Err(ConfigError::NoRocks);
        }

        let generations = &self.rocks.generations;
        if self.rocks.starting_generation >= generations.len() {
            return Err(ConfigError::UnknownStartingGeneration(
                self.rocks.starting_generation,
            ));
        }

        // Children must be strictly later in the list, so splitting always ends
        for (generation, rock) in generations.iter().enumerate() {
            if let Some(child) = rock.child {
                if child <= generation || child >= generations.len() {
                    return Err(ConfigError::InvalidRockChild { generation, child });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_file_keeps_other_sections() {
        let config = GameConfig::from_ron_str(
            "(session: (starting_score: 0, starting_lives: 5, saucer_spawn_rate: 4.0))",
            "inline",
        )
        .unwrap();
        assert_eq!(config.session.starting_lives, 5);
        assert_eq!(config.rocks.starting_count, 4);
        assert_eq!(config.ship.fire_rate, 0.5);
    }

    #[test]
    fn shipped_config_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_PATH);
        GameConfig::from_path(path).unwrap();
    }

    #[test]
    fn rock_child_must_be_a_later_generation() {
        let mut config = GameConfig::default();
        config.rocks.generations[1].child = Some(1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRockChild {
                generation: 1,
                child: 1
            })
        ));

        config.rocks.generations[1].child = Some(9);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRockChild { child: 9, .. })
        ));
    }

    #[test]
    fn starting_generation_must_exist() {
        let mut config = GameConfig::default();
        config.rocks.starting_generation = 3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownStartingGeneration(3))
        ));
    }

    #[test]
    fn zero_lives_rejected() {
        let mut config = GameConfig::default();
        config.session.starting_lives = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoLives)));
    }

    #[test]
    fn empty_starting_field_rejected() {
        let mut config = GameConfig::default();
        config.rocks.starting_count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoRocks)));

        let err = GameConfig::from_ron_str(
            "(rocks: (generations: [(radius: 0.5, speed: 1.0, children: 0, score: 10)], \
             starting_generation: 0, starting_count: 0, spawn_radius: 4.0, \
             wrap_padding: 1.0, linear_damping: 1.0))",
            "inline",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NoRocks));
    }

    #[test]
    fn zero_fire_rate_rejected() {
        let mut config = GameConfig::default();
        config.ship.fire_rate = 0.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "'ship.fire_rate' must be greater than zero");
    }

    #[test]
    fn garbage_reports_parse_error() {
        let err = GameConfig::from_ron_str("(ship: 12", "broken.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "broken.ron"));
    }

    #[test]
    fn missing_file_reports_read_error() {
        let err = GameConfig::from_path("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
