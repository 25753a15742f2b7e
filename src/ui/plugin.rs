//! UI plugin - HUD and screen fades.

use bevy::prelude::*;

use super::fade::{advance_fades, fade_in, fade_out, spawn_fade_overlay};
use super::hud::{refresh_hud, spawn_hud};
use crate::core::LevelPhase;
use crate::rendering::SpriteAssets;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteAssets>()
            .add_systems(Startup, spawn_fade_overlay)

            // HUD lives and dies with the session
            .add_systems(OnEnter(LevelPhase::Loaded), (spawn_hud, fade_in))
            .add_systems(Update, refresh_hud.run_if(in_state(LevelPhase::Running)))

            // Fade out before tearing the session down
            .add_systems(OnEnter(LevelPhase::Transitioning), fade_out)
            .add_systems(Update, advance_fades);
    }
}
