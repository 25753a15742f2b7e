//! Player module - hero state machine, input, and spawning.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{kill_hero, spawn_hero, InputBindings, JumpHold, MotionIntent};
pub use plugin::PlayerPlugin;
