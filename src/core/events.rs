//! Global events used for cross-system communication.
//!
//! Timed sequences (death clips, the door walk, screen fades) never call back
//! into gameplay code. They finish by sending one of the completion events
//! below, and the lifecycle systems react to those.

use bevy::prelude::*;

use super::animation::Clip;
use super::tween::TweenTag;

/// Fire-and-forget audio cue.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Coin,
    Key,
    Door,
    Stomp,
    Jump,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::Coin,
        SoundCue::Key,
        SoundCue::Door,
        SoundCue::Stomp,
        SoundCue::Jump,
    ];

    /// Asset path of the cue, relative to `assets/`.
    pub fn path(self) -> &'static str {
        match self {
            SoundCue::Coin => "audio/coin.wav",
            SoundCue::Key => "audio/key.wav",
            SoundCue::Door => "audio/door.wav",
            SoundCue::Stomp => "audio/stomp.wav",
            SoundCue::Jump => "audio/jump.wav",
        }
    }
}

/// Sent when gameplay wants to leave the current level.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRequest {
    /// Reload the level that is currently active.
    Restart,
    /// Move on to the next level index.
    Advance,
}

/// Which kind of actor an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    Hero,
    Enemy,
}

/// Sent after an actor has been removed from the simulation.
#[derive(Event, Debug, Clone, Copy)]
pub struct ActorDestroyed {
    pub entity: Entity,
    pub kind: ActorKind,
}

/// Sent when a play-once clip reaches its last frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct AnimationCompleted {
    pub entity: Entity,
    pub clip: Clip,
}

/// Sent when a tween reaches its end values.
#[derive(Event, Debug, Clone, Copy)]
pub struct TweenCompleted {
    pub entity: Entity,
    pub tag: TweenTag,
}

/// Direction of a full-screen fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Sent when a screen fade finishes.
#[derive(Event, Debug, Clone, Copy)]
pub struct FadeCompleted {
    pub direction: FadeDirection,
}
