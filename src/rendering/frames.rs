//! Per-frame sprite presentation.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::core::{Clip, SpriteAnimation};
use crate::player::{Facing, Hero};
use crate::world::Door;

/// Vertical idle bob, e.g. on the key.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bob {
    pub origin_y: f32,
    pub amplitude: f32,
    pub period: f32,
    elapsed: f32,
}

impl Bob {
    pub fn new(origin_y: f32) -> Self {
        Self {
            origin_y,
            amplitude: 6.0,
            period: 0.8,
            elapsed: 0.0,
        }
    }

    /// Sine in-out up over one period, then back down over the next.
    pub fn offset(&self) -> f32 {
        self.amplitude * (1.0 - (PI * self.elapsed / self.period).cos()) / 2.0
    }

    pub fn advance(&mut self, delta: f32) {
        self.elapsed = (self.elapsed + delta) % (2.0 * self.period);
    }
}

/// Atlas frame for the requested clip. Death holds its last frame.
pub fn clip_frame(animation: &SpriteAnimation) -> usize {
    let frames = animation.clip().frames();
    match animation.clip() {
        Clip::HeroDie => frames.held_frame(animation.elapsed()),
        _ => frames.looped_frame(animation.elapsed()),
    }
}

pub fn apply_sprite_frames(mut query: Query<(&SpriteAnimation, &mut Sprite, Option<&Hero>)>) {
    for (animation, mut sprite, hero) in query.iter_mut() {
        let frame = clip_frame(animation);
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            if atlas.index != frame {
                atlas.index = frame;
            }
        }
        if let Some(hero) = hero {
            sprite.flip_x = hero.facing == Facing::Left;
        }
    }
}

pub fn sync_door_frames(mut doors: Query<(&Door, &mut Sprite), Changed<Door>>) {
    for (door, mut sprite) in doors.iter_mut() {
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = door.state.frame();
        }
    }
}

pub fn bob_sprites(time: Res<Time>, mut query: Query<(&mut Bob, &mut Transform)>) {
    for (mut bob, mut transform) in query.iter_mut() {
        bob.advance(time.delta_secs());
        transform.translation.y = bob.origin_y + bob.offset();
    }
}
