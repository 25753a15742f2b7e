//! Error types for level data loading.

use thiserror::Error;

/// Errors that can occur when discovering or loading a level.
///
/// All of them are fatal for the level being loaded: nothing of it is spawned.
#[derive(Debug, Error)]
pub enum LevelLoadError {
    /// Level file or directory could not be read.
    #[error("Failed to read '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed, including missing required fields.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// A platform names an image missing from the platform catalog.
    #[error("Platform {index} uses unknown image '{image}'")]
    UnknownPlatformImage { index: usize, image: String },

    /// The levels directory holds no level files.
    #[error("No level files found in '{dir}'")]
    NoLevels { dir: String },

    /// The requested level index is not registered.
    #[error("Level {index} requested but only {count} level(s) registered")]
    IndexOutOfRange { index: usize, count: usize },
}
