//! Rendering module - camera, screen bounds and body visuals.

mod plugin;

pub use plugin::{GameCamera, Palette, RenderingPlugin, PIXELS_PER_UNIT};
