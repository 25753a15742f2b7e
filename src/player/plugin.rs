//! Player plugin - input, hero state machine, and hero death.

use bevy::prelude::*;
use bevy_rapier2d::prelude::PhysicsSet;

use super::movement;
use crate::collision::GameplaySet;
use crate::core::LevelPhase;

/// Player plugin - handles hero input, state updates, and death.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<movement::InputBindings>()
            .init_resource::<movement::JumpHold>()
            .add_systems(OnEnter(LevelPhase::Initializing), movement::bind_input)
            .add_systems(
                Update,
                (movement::track_jump_hold, movement::drive_hero)
                    .chain()
                    .in_set(GameplaySet::Input),
            )
            .add_systems(
                PostUpdate,
                movement::update_hero_states
                    .in_set(GameplaySet::Present)
                    .after(PhysicsSet::Writeback),
            )
            .add_systems(
                Update,
                movement::despawn_dead_heroes
                    .run_if(in_state(LevelPhase::Running).or(in_state(LevelPhase::Transitioning))),
            );
    }
}
