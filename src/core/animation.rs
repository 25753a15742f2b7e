//! Named animation requests and play-once clips.
//!
//! Gameplay decides *which* clip an entity should show; the rendering plugin
//! turns the current clip and its elapsed time into sprite sheet frames.

use std::time::Duration;

use bevy::prelude::*;

use super::events::AnimationCompleted;

/// Every clip the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    HeroStop,
    HeroRun,
    HeroJump,
    HeroFall,
    HeroDie,
    EnemyCrawl,
    CoinRotate,
}

/// Frame range and playback rate of a clip on its sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipFrames {
    pub first: usize,
    pub last: usize,
    pub fps: u32,
}

impl Clip {
    pub fn frames(self) -> ClipFrames {
        match self {
            Clip::HeroStop => ClipFrames { first: 0, last: 0, fps: 1 },
            Clip::HeroRun => ClipFrames { first: 1, last: 2, fps: 8 },
            Clip::HeroJump => ClipFrames { first: 3, last: 3, fps: 1 },
            Clip::HeroFall => ClipFrames { first: 4, last: 4, fps: 1 },
            Clip::HeroDie => ClipFrames { first: 5, last: 6, fps: 12 },
            Clip::EnemyCrawl => ClipFrames { first: 0, last: 2, fps: 8 },
            Clip::CoinRotate => ClipFrames { first: 0, last: 3, fps: 6 },
        }
    }
}

impl ClipFrames {
    /// Frame to show after `elapsed` seconds of looping playback.
    pub fn looped_frame(self, elapsed: f32) -> usize {
        let count = self.last - self.first + 1;
        let step = (elapsed * self.fps as f32) as usize;
        self.first + step % count
    }

    /// Frame to show after `elapsed` seconds, holding on the last frame.
    pub fn held_frame(self, elapsed: f32) -> usize {
        let step = (elapsed * self.fps as f32) as usize;
        (self.first + step).min(self.last)
    }
}

/// The clip an entity currently requests, plus how long it has been playing.
#[derive(Component, Debug, Clone)]
pub struct SpriteAnimation {
    clip: Clip,
    elapsed: f32,
}

impl SpriteAnimation {
    pub fn new(clip: Clip) -> Self {
        Self { clip, elapsed: 0.0 }
    }

    pub fn clip(&self) -> Clip {
        self.clip
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Request a clip. Playback restarts only when the clip changes.
    pub fn request(&mut self, clip: Clip) {
        if self.clip != clip {
            self.clip = clip;
            self.elapsed = 0.0;
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta.as_secs_f32();
    }
}

/// A clip played exactly once, reported through [`AnimationCompleted`].
#[derive(Component, Debug, Clone)]
pub struct PlayOnce {
    pub clip: Clip,
    timer: Timer,
}

impl PlayOnce {
    pub fn new(clip: Clip, secs: f32) -> Self {
        Self {
            clip,
            timer: Timer::from_seconds(secs, TimerMode::Once),
        }
    }

    /// Returns true on the tick that completes the clip.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta).just_finished()
    }
}

/// Advance looping clip clocks.
pub fn advance_sprite_animations(time: Res<Time>, mut query: Query<&mut SpriteAnimation>) {
    for mut animation in query.iter_mut() {
        animation.advance(time.delta());
    }
}

/// Advance play-once clips and send a completion event for each finished one.
pub fn advance_play_once(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut PlayOnce)>,
    mut completed: EventWriter<AnimationCompleted>,
) {
    for (entity, mut play_once) in query.iter_mut() {
        if play_once.advance(time.delta()) {
            commands.entity(entity).remove::<PlayOnce>();
            completed.send(AnimationCompleted {
                entity,
                clip: play_once.clip,
            });
        }
    }
}
