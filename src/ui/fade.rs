//! Full-screen fade between levels.

use bevy::prelude::*;

use crate::core::{FadeCompleted, FadeDirection, GameConfig};

/// The persistent black overlay. Starts opaque.
#[derive(Component, Debug)]
pub struct ScreenFade {
    direction: Option<FadeDirection>,
    timer: Timer,
}

impl ScreenFade {
    fn start(&mut self, direction: FadeDirection, secs: f32) {
        self.direction = Some(direction);
        self.timer = Timer::from_seconds(secs, TimerMode::Once);
    }
}

/// Overlay alpha at `fraction` of the way through a fade.
pub fn fade_alpha(direction: FadeDirection, fraction: f32) -> f32 {
    let fraction = fraction.clamp(0.0, 1.0);
    match direction {
        FadeDirection::In => 1.0 - fraction,
        FadeDirection::Out => fraction,
    }
}

pub fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::BLACK),
        GlobalZIndex(i32::MAX),
        ScreenFade {
            direction: None,
            timer: Timer::default(),
        },
    ));
}

pub fn fade_in(config: Res<GameConfig>, mut fades: Query<&mut ScreenFade>) {
    for mut fade in fades.iter_mut() {
        fade.start(FadeDirection::In, config.fade_secs);
    }
}

pub fn fade_out(config: Res<GameConfig>, mut fades: Query<&mut ScreenFade>) {
    for mut fade in fades.iter_mut() {
        fade.start(FadeDirection::Out, config.fade_secs);
    }
}

pub fn advance_fades(
    time: Res<Time>,
    mut fades: Query<(&mut ScreenFade, &mut BackgroundColor)>,
    mut completed: EventWriter<FadeCompleted>,
) {
    for (mut fade, mut background) in fades.iter_mut() {
        let Some(direction) = fade.direction else {
            continue;
        };

        fade.timer.tick(time.delta());
        background.0 = Color::srgba(0.0, 0.0, 0.0, fade_alpha(direction, fade.timer.fraction()));

        if fade.timer.just_finished() {
            fade.direction = None;
            completed.send(FadeCompleted { direction });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_run_between_clear_and_black() {
        assert_eq!(fade_alpha(FadeDirection::In, 0.0), 1.0);
        assert_eq!(fade_alpha(FadeDirection::In, 1.0), 0.0);
        assert_eq!(fade_alpha(FadeDirection::Out, 0.25), 0.25);
        assert_eq!(fade_alpha(FadeDirection::Out, 2.0), 1.0);
    }
}
