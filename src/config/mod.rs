//! Config module - gameplay tuning data and its loading errors.

mod data;
mod error;

pub use data::{
    BulletConfig, GameConfig, RockConfig, RockGeneration, SaucerConfig, SessionConfig,
    ShipConfig, CONFIG_PATH,
};
pub use error::ConfigError;
