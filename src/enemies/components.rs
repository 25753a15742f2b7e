//! Enemy-related components.

use bevy::prelude::*;

/// A patrolling enemy. Reduced hero state machine: alive or dead.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub alive: bool,
}

impl Default for Enemy {
    fn default() -> Self {
        Self { alive: true }
    }
}

impl Enemy {
    pub fn die(&mut self) {
        self.alive = false;
    }
}

/// Solid contacts on either side of an enemy, refreshed after each physics step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatrolContacts {
    pub left: bool,
    pub right: bool,
}
