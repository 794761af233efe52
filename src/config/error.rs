//! Error types for game config loading.

use thiserror::Error;

/// Errors that can occur when loading or validating the game config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// A rock generation splits into itself, a bigger rock, or nothing known.
    #[error("Rock generation {generation} names child {child}, which is not a later generation")]
    InvalidRockChild { generation: usize, child: usize },

    /// The starting rock generation is not in the generation list.
    #[error("Unknown starting rock generation {0}")]
    UnknownStartingGeneration(usize),

    /// A speed, rate or duration that must be above zero.
    #[error("'{field}' must be greater than zero")]
    NonPositive { field: &'static str },

    /// The game would be over before it starts.
    #[error("starting_lives must be at least 1")]
    NoLives,

    /// An empty field would be refilled with nothing, forever.
    #[error("rocks.starting_count must be at least 1")]
    NoRocks,
}
