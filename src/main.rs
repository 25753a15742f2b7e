//! Platformer - Entry Point
//!
//! Controls:
//! - Left / Right arrows: Run
//! - Up arrow: Jump

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer".to_string(),
                resolution: (960.0, 600.0).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))

        // Audio
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(platformer::PlatformerPlugin)

        .run();
}
