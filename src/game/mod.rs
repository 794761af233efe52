//! Game module - the coordinator: state machine, scoreboard, rock
//! population and saucer scheduling.

mod flow;
mod plugin;
mod saucer_spawn;
mod scoreboard;

pub use flow::THRUST_THRESHOLD;
pub use plugin::GamePlugin;
pub use saucer_spawn::{SaucerSpawner, SpawnCorner};
pub use scoreboard::ScoreBoard;
