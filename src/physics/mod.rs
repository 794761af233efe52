//! Physics module - rapier body setup and the collision bridge.

mod body;
mod plugin;

pub use body::{dynamic_body, facing, heading, push_forward};
pub use plugin::PhysicsBridgePlugin;
