//! UI module - menus, HUD and game-over screen.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
