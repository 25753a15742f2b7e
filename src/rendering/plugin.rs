//! Rendering plugin - camera, sprite sheets, and sprite presentation.

use bevy::prelude::*;

use super::frames::{apply_sprite_frames, bob_sprites, sync_door_frames};
use super::sprites::{load_sprite_assets, SpriteAssets};
use crate::collision::GameplaySet;
use crate::core::config::load_game_config;
use crate::core::LevelPhase;

/// Rendering plugin - requires the asset and render plugins.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteAssets>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(
                Startup,
                (spawn_camera, load_sprite_assets.after(load_game_config)),
            )
            .add_systems(
                PostUpdate,
                (apply_sprite_frames, sync_door_frames).in_set(GameplaySet::Present),
            )
            .add_systems(
                Update,
                bob_sprites.run_if(in_state(LevelPhase::Running).or(in_state(LevelPhase::Transitioning))),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
