//! World module - level data, planning, and spawning.

mod builder;
mod components;
mod data;
mod error;
mod plugin;
mod spawning;

pub use builder::{plan_level, LevelPlan, LevelSpace, Placement, PlacementKind};
pub use components::{Decoration, Door, DoorState};
pub use data::{DecorationRecord, LevelDescription, LevelRegistry, PlatformRecord, Point, LEVELS_DIR};
pub use error::LevelLoadError;
pub use plugin::{load_level, WorldPlugin};
pub use spawning::spawn_level;
