//! Timed transform/alpha tweening with completion events.

use std::time::Duration;

use bevy::prelude::*;

use super::events::TweenCompleted;

/// What a tween is for, reported back in [`TweenCompleted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenTag {
    /// Hero walking into an open door.
    DoorEntry,
}

/// Linear interpolation of a sprite's position and alpha over a fixed time.
#[derive(Component, Debug, Clone)]
pub struct Tween {
    pub tag: TweenTag,
    pub from: Vec2,
    pub to: Vec2,
    pub alpha_from: f32,
    pub alpha_to: f32,
    timer: Timer,
}

impl Tween {
    pub fn new(tag: TweenTag, from: Vec2, to: Vec2, secs: f32) -> Self {
        Self {
            tag,
            from,
            to,
            alpha_from: 1.0,
            alpha_to: 1.0,
            timer: Timer::from_seconds(secs, TimerMode::Once),
        }
    }

    /// Fade the sprite between two alpha values while moving.
    pub fn with_alpha(mut self, from: f32, to: f32) -> Self {
        self.alpha_from = from;
        self.alpha_to = to;
        self
    }

    /// Advance the tween. Returns true on the tick that finishes it.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta).just_finished()
    }

    pub fn fraction(&self) -> f32 {
        self.timer.fraction()
    }

    pub fn position(&self) -> Vec2 {
        self.from.lerp(self.to, self.fraction())
    }

    pub fn alpha(&self) -> f32 {
        self.alpha_from + (self.alpha_to - self.alpha_from) * self.fraction()
    }
}

/// System that moves tweened entities and reports finished tweens.
pub fn advance_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Tween, &mut Transform, Option<&mut Sprite>)>,
    mut completed: EventWriter<TweenCompleted>,
) {
    for (entity, mut tween, mut transform, sprite) in query.iter_mut() {
        let finished = tween.advance(time.delta());

        let position = tween.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;

        if let Some(mut sprite) = sprite {
            sprite.color = Color::srgba(1.0, 1.0, 1.0, tween.alpha());
        }

        if finished {
            commands.entity(entity).remove::<Tween>();
            completed.send(TweenCompleted {
                entity,
                tag: tween.tag,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_reaches_target_exactly_once() {
        let mut tween = Tween::new(TweenTag::DoorEntry, Vec2::new(0.0, 10.0), Vec2::new(100.0, 10.0), 0.5)
            .with_alpha(1.0, 0.0);

        assert!(!tween.advance(Duration::from_millis(250)));
        assert_eq!(tween.position(), Vec2::new(50.0, 10.0));
        assert!((tween.alpha() - 0.5).abs() < 1e-6);

        assert!(tween.advance(Duration::from_millis(300)));
        assert_eq!(tween.position(), Vec2::new(100.0, 10.0));
        assert_eq!(tween.alpha(), 0.0);

        assert!(!tween.advance(Duration::from_millis(100)));
    }
}
