//! Collision module - categories, the resolution table, and its effects.

mod effects;
mod plugin;
mod resolve;
mod sensing;
mod table;

pub use plugin::{CollisionPlugin, GameplaySet};
pub use resolve::resolve_collisions;
pub use sensing::Overlaps;
pub use table::{
    physics_groups, sense_groups, Category, CollisionPair, CollisionRule, CollisionTable,
    Effect, Guard, Resolution,
};
