//! Hero components and the hero state machine.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::core::Clip;

/// Which way the hero sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Speeds at or below this many pixels per second count as standing still.
///
/// The solver leaves a small residual velocity on bodies resting on a
/// platform, so exact zero never holds for a grounded hero.
pub const REST_SPEED: f32 = 1.0;

/// Whether a velocity moves downward faster than resting jitter.
pub fn is_falling(velocity: Vec2) -> bool {
    velocity.y < -REST_SPEED
}

/// Animation/motion state, chosen every frame by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroState {
    Dead,
    Frozen,
    Jumping,
    Falling,
    Running,
    #[default]
    Idle,
}

impl HeroState {
    /// Pick the state from the physical situation alone.
    ///
    /// Priority, highest first: dead, frozen, jumping (moving up), falling
    /// (not moving up and not grounded), running (moving sideways on the
    /// ground), idle.
    pub fn derive(alive: bool, frozen: bool, velocity: Vec2, grounded: bool) -> Self {
        if !alive {
            HeroState::Dead
        } else if frozen {
            HeroState::Frozen
        } else if velocity.y > REST_SPEED {
            HeroState::Jumping
        } else if !grounded {
            HeroState::Falling
        } else if velocity.x.abs() > REST_SPEED {
            HeroState::Running
        } else {
            HeroState::Idle
        }
    }

    pub fn clip(self) -> Clip {
        match self {
            HeroState::Dead => Clip::HeroDie,
            HeroState::Frozen | HeroState::Idle => Clip::HeroStop,
            HeroState::Jumping => Clip::HeroJump,
            HeroState::Falling => Clip::HeroFall,
            HeroState::Running => Clip::HeroRun,
        }
    }
}

/// The player-controlled actor.
///
/// Position and velocity live in the physics components on the same entity;
/// the operations below mutate the `Velocity` they are handed.
#[derive(Component, Debug, Clone)]
pub struct Hero {
    pub alive: bool,
    pub frozen: bool,
    pub facing: Facing,
    pub state: HeroState,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            alive: true,
            frozen: false,
            facing: Facing::Right,
            state: HeroState::Idle,
        }
    }
}

impl Hero {
    /// Whether the hero still takes part in contacts and input.
    pub fn is_active(&self) -> bool {
        self.alive && !self.frozen
    }

    /// Set horizontal velocity from a direction in {-1, 0, 1}.
    ///
    /// Ignored while frozen or dead. Facing only changes for a non-zero
    /// direction.
    pub fn move_toward(&mut self, velocity: &mut Velocity, direction: i8, speed: f32) {
        if !self.is_active() {
            return;
        }

        velocity.linvel.x = f32::from(direction.signum()) * speed;

        match direction.signum() {
            -1 => self.facing = Facing::Left,
            1 => self.facing = Facing::Right,
            _ => {}
        }
    }

    /// Jump if grounded. Returns whether the jump happened.
    pub fn jump(&self, velocity: &mut Velocity, grounded: bool, jump_speed: f32) -> bool {
        if grounded {
            velocity.linvel.y = jump_speed;
        }
        grounded
    }

    /// Stomp recoil, applied regardless of ground contact or freezing.
    pub fn bounce(velocity: &mut Velocity, bounce_speed: f32) {
        velocity.linvel.y = bounce_speed;
    }

    /// Enter the terminal dead state.
    pub fn die(&mut self) {
        self.alive = false;
        self.state = HeroState::Dead;
    }

    /// Stop responding to motion input, keeping the current velocity.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Re-derive the state for this frame. Dead stays dead.
    pub fn refresh_state(&mut self, velocity: Vec2, grounded: bool) -> HeroState {
        self.state = HeroState::derive(self.alive, self.frozen, velocity, grounded);
        self.state
    }
}

/// Whether the hero's feet touch a solid collider this frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grounded(pub bool);
