//! Level lifecycle states that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Gameplay input and
//! collision resolution only run while `Running`; the loader only runs on
//! entering `Loaded`.

use bevy::prelude::*;

/// Lifecycle of one level playthrough attempt.
///
/// The game cycles indefinitely between levels:
/// - Start in `Booting` to read config and discover level files
/// - `Initializing` resets the session and selects the level index
/// - `Loaded` builds the level and the HUD
/// - `Running` is active gameplay
/// - `Transitioning` fades out before re-entering `Initializing`
/// - `Halted` when a level description is malformed
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum LevelPhase {
    /// Reading config and level files
    #[default]
    Booting,
    /// Session counters reset, level index chosen
    Initializing,
    /// Level entities and HUD being built
    Loaded,
    /// Active gameplay
    Running,
    /// Fading out towards a restart or the next level
    Transitioning,
    /// A fatal configuration error stopped level loading
    Halted,
}
