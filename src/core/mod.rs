//! Core game module - states, events, and shared resources.
//!
//! This module provides the foundation that all other game systems build upon.

mod bounds;
mod events;
mod input;
mod plugin;
mod random;
mod states;

pub use bounds::{wrap_at_edges, ScreenBounds, ScreenWrap};
pub use events::*;
pub use input::{ControlInput, KeyboardInputPlugin};
pub use plugin::CorePlugin;
pub use random::GameRng;
pub use states::*;
