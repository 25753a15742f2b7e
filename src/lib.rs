//! Platformer - a single-screen 2D platformer in Bevy.
//!
//! The hero runs and jumps across platforms, collects coins, stomps patrolling
//! enemies, and needs the level's key to walk through its door.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Level phases, global events, session, lifecycle controller
//! - **Player**: Hero input, movement, and state machine
//! - **Enemies**: Patrolling enemies
//! - **Collision**: Collision categories, the resolution table, its effects
//! - **World**: Level data, planning, and spawning
//! - **Rendering**: Camera, sprite sheets, frame selection
//! - **Audio**: Sound effect cues
//! - **UI**: HUD and screen fades

pub mod audio;
pub mod collision;
pub mod core;
pub mod enemies;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Gameplay plugins that run without a window, renderer, or audio device.
pub struct HeadlessGamePlugin;

impl Plugin for HeadlessGamePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Gameplay
            .add_plugins(collision::CollisionPlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}

/// Main game plugin that adds all sub-plugins.
pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(HeadlessGamePlugin)
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(audio::AudioFxPlugin);
    }
}
