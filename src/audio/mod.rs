//! Audio module - one-shot sound effects for gameplay cues.

mod plugin;

pub use plugin::{AudioFxPlugin, SoundLibrary};
