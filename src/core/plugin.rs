//! Core plugin that sets up level phases, events, and the lifecycle controller.

use bevy::prelude::*;

use super::animation::{advance_play_once, advance_sprite_animations};
use super::config::{load_game_config, GameConfig};
use super::events::*;
use super::lifecycle;
use super::session::LevelCursor;
use super::states::*;
use super::tween::advance_tweens;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Level phases (Booting, Initializing, Loaded, Running, Transitioning)
/// - Global events (SoundCue, TransitionRequest, completion events)
/// - The lifecycle controller and the timed sequences it listens to
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize level phases
            .init_state::<LevelPhase>()

            // Config defaults until the file has been read
            .init_resource::<GameConfig>()
            .init_resource::<LevelCursor>()

            // Register global events
            .add_event::<SoundCue>()
            .add_event::<TransitionRequest>()
            .add_event::<ActorDestroyed>()
            .add_event::<AnimationCompleted>()
            .add_event::<TweenCompleted>()
            .add_event::<FadeCompleted>()

            // Config first, then leave Booting on the first frame
            .add_systems(
                Startup,
                (load_game_config, lifecycle::finish_booting).chain(),
            )
            .add_systems(OnEnter(LevelPhase::Initializing), lifecycle::initialize_session)

            // Timed sequences keep running while fading out
            .add_systems(
                Update,
                (advance_tweens, advance_play_once, advance_sprite_animations)
                    .run_if(in_state(LevelPhase::Running).or(in_state(LevelPhase::Transitioning))),
            )
            .add_systems(
                Update,
                (lifecycle::route_completions, lifecycle::begin_transition)
                    .chain()
                    .after(advance_tweens)
                    .after(advance_play_once)
                    .run_if(in_state(LevelPhase::Running)),
            )
            .add_systems(
                Update,
                lifecycle::finish_transition.run_if(in_state(LevelPhase::Transitioning)),
            );
    }
}
