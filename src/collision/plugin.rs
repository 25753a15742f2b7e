//! Collision plugin - frame ordering, sensing, and resolution.

use bevy::prelude::*;
use bevy_rapier2d::prelude::PhysicsSet;

use super::resolve::resolve_collisions;
use super::sensing::{sense_ground, sense_overlaps, Overlaps};
use super::table::CollisionTable;
use crate::core::LevelPhase;

/// System set ordering for one gameplay frame.
///
/// Input and motion intents run in `Update`, before the physics step. Sensing,
/// resolution, and presentation run in `PostUpdate` after Rapier has written
/// positions back.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Input,
    Motion,
    Sense,
    Resolve,
    Present,
}

/// Collision plugin - handles the collision resolution table.
pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<CollisionTable>()
            .init_resource::<Overlaps>()

            // System ordering
            .configure_sets(
                Update,
                (GameplaySet::Input, GameplaySet::Motion)
                    .chain()
                    .run_if(in_state(LevelPhase::Running)),
            )
            .configure_sets(
                PostUpdate,
                (GameplaySet::Sense, GameplaySet::Resolve)
                    .chain()
                    .after(PhysicsSet::Writeback)
                    .run_if(in_state(LevelPhase::Running)),
            )
            .configure_sets(
                PostUpdate,
                GameplaySet::Present
                    .after(GameplaySet::Resolve)
                    .run_if(in_state(LevelPhase::Running).or(in_state(LevelPhase::Transitioning))),
            )

            // Sensing systems
            .add_systems(
                PostUpdate,
                (sense_overlaps, sense_ground).in_set(GameplaySet::Sense),
            )

            // Resolution
            .add_systems(PostUpdate, resolve_collisions.in_set(GameplaySet::Resolve));
    }
}
