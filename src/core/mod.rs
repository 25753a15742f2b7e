//! Core game module - phases, events, session, and the lifecycle controller.
//!
//! This module provides the foundation that all other game systems build upon.

pub mod animation;
pub mod config;
mod events;
pub mod lifecycle;
mod plugin;
mod session;
mod states;
mod tween;

pub use animation::{Clip, PlayOnce, SpriteAnimation};
pub use config::{GameConfig, Size};
pub use events::*;
pub use plugin::CorePlugin;
pub use session::{LevelCursor, LevelSession, SessionEntity};
pub use states::*;
pub use tween::*;
