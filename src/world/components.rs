//! Components of the static level entities.

use bevy::prelude::*;

/// Whether a door has been opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl DoorState {
    /// Sprite sheet frame for the state.
    pub fn frame(self) -> usize {
        match self {
            DoorState::Closed => 0,
            DoorState::Open => 1,
        }
    }
}

/// The level exit. Opens at most once per session.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Door {
    pub state: DoorState,
}

impl Door {
    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    pub fn open(&mut self) {
        self.state = DoorState::Open;
    }
}

/// Marker for decorative sprites.
#[derive(Component, Debug, Clone, Copy)]
pub struct Decoration;
