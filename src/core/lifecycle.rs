//! Level lifecycle controller.
//!
//! Drives `initializing -> loaded -> running -> transitioning` and back. The
//! loader and HUD hook into `OnEnter(LevelPhase::Loaded)` from their own
//! plugins; this module owns the session and the transitions between levels.

use bevy::prelude::*;

use super::events::{
    ActorDestroyed, ActorKind, FadeCompleted, FadeDirection, TransitionRequest, TweenCompleted,
};
use super::session::{LevelCursor, LevelSession, SessionEntity};
use super::states::LevelPhase;
use super::tween::TweenTag;
use crate::world::LevelRegistry;

/// Leave `Booting` once config and level discovery have run.
pub fn finish_booting(mut next_state: ResMut<NextState<LevelPhase>>) {
    next_state.set(LevelPhase::Initializing);
}

/// Start a fresh session for the requested level.
pub fn initialize_session(
    mut commands: Commands,
    cursor: Res<LevelCursor>,
    registry: Res<LevelRegistry>,
    mut next_state: ResMut<NextState<LevelPhase>>,
) {
    let Some(level) = cursor.select(registry.len()) else {
        error!("No levels available, halting");
        next_state.set(LevelPhase::Halted);
        return;
    };

    info!("Starting session for level {} of {}", level, registry.len());
    commands.insert_resource(LevelSession::new(level));
    next_state.set(LevelPhase::Loaded);
}

/// Turn completion notifications into transition requests.
pub fn route_completions(
    mut tweens: EventReader<TweenCompleted>,
    mut destroyed: EventReader<ActorDestroyed>,
    mut requests: EventWriter<TransitionRequest>,
) {
    for event in tweens.read() {
        if event.tag == TweenTag::DoorEntry {
            requests.send(TransitionRequest::Advance);
        }
    }

    for event in destroyed.read() {
        if event.kind == ActorKind::Hero {
            requests.send(TransitionRequest::Restart);
        }
    }
}

/// Honour the first transition request of the frame and start fading out.
pub fn begin_transition(
    mut requests: EventReader<TransitionRequest>,
    session: Option<Res<LevelSession>>,
    mut cursor: ResMut<LevelCursor>,
    mut next_state: ResMut<NextState<LevelPhase>>,
) {
    let Some(request) = requests.read().next().copied() else {
        return;
    };
    // One transition at a time; the rest of this frame's requests are dropped.
    requests.clear();

    let current = session.map_or(cursor.requested, |s| s.level);
    cursor.retarget(request, current);

    info!("{:?} requested: level {} -> {}", request, current, cursor.requested);
    next_state.set(LevelPhase::Transitioning);
}

/// Discard the session once the fade-out has finished.
pub fn finish_transition(
    mut commands: Commands,
    mut fades: EventReader<FadeCompleted>,
    session_entities: Query<Entity, With<SessionEntity>>,
    mut next_state: ResMut<NextState<LevelPhase>>,
) {
    if !fades.read().any(|fade| fade.direction == FadeDirection::Out) {
        return;
    }

    teardown_session(&mut commands, &session_entities);
    next_state.set(LevelPhase::Initializing);
}

/// Despawn every entity of the current session and drop its counters.
pub fn teardown_session(commands: &mut Commands, session_entities: &Query<Entity, With<SessionEntity>>) {
    let mut count = 0;
    for entity in session_entities.iter() {
        commands.entity(entity).despawn_recursive();
        count += 1;
    }
    commands.remove_resource::<LevelSession>();
    info!("Tore down session ({} entities)", count);
}
