//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use crate::collision::GameplaySet;

/// Enemy plugin - handles enemy patrol motion and wall sensing.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            // Patrol runs with the rest of the motion intents
            .add_systems(Update, ai::patrol.in_set(GameplaySet::Motion))
            // Side contacts are read back after the physics step
            .add_systems(PostUpdate, ai::sense_patrol_contacts.in_set(GameplaySet::Sense));
    }
}
