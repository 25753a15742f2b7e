//! Rendering module - camera, sprite sheets, and frame selection.

mod frames;
mod plugin;
mod sprites;

pub use frames::{clip_frame, Bob};
pub use plugin::RenderingPlugin;
pub use sprites::SpriteAssets;
