//! Enemies module - patrolling enemies and their spawning.

mod ai;
mod components;
mod plugin;
mod spawning;

pub use ai::{kill_enemy, patrol_velocity};
pub use components::*;
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
