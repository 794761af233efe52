//! Audio module - sound effects for gameplay cues.

mod plugin;

pub use plugin::{SfxLibrary, SfxPlugin};
