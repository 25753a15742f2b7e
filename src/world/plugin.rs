//! World plugin - level discovery, loading, and physics setup.

use bevy::prelude::*;
use bevy_rapier2d::prelude::RapierConfiguration;

use crate::collision::CollisionTable;
use crate::core::{GameConfig, LevelPhase, LevelSession};
use crate::rendering::SpriteAssets;

use super::builder::plan_level;
use super::data::{discover_levels, LevelRegistry};
use super::spawning::spawn_level;

/// World plugin - handles level loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .init_resource::<SpriteAssets>()
            .add_systems(Startup, discover_levels)
            .add_systems(OnEnter(LevelPhase::Initializing), apply_gravity)
            .add_systems(OnEnter(LevelPhase::Loaded), load_level);
    }
}

/// Build the session's level from data and start running it.
///
/// The plan is complete before anything spawns; any load error halts the
/// game with nothing of the level in the world.
pub fn load_level(
    mut commands: Commands,
    registry: Res<LevelRegistry>,
    session: Res<LevelSession>,
    config: Res<GameConfig>,
    table: Res<CollisionTable>,
    sprites: Res<SpriteAssets>,
    mut next_state: ResMut<NextState<LevelPhase>>,
) {
    let plan = registry
        .load(session.level)
        .and_then(|level| plan_level(&level, &config));

    match plan {
        Ok(plan) => {
            info!("Building level {}", session.level);
            spawn_level(&mut commands, &plan, &sprites, &config, &table);
            next_state.set(LevelPhase::Running);
        }
        Err(e) => {
            error!("Failed to load level {}: {}", session.level, e);
            next_state.set(LevelPhase::Halted);
        }
    }
}

/// Point world gravity down with the configured strength.
fn apply_gravity(config: Res<GameConfig>, mut rapier: Query<&mut RapierConfiguration>) {
    for mut rapier in rapier.iter_mut() {
        rapier.gravity = Vec2::new(0.0, -config.gravity);
    }
}
