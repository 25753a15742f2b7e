//! Headless level lifecycle tests: load, collect, die, and move between levels.

use std::time::Duration;

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use platformer::collision::{Category, Overlaps};
use platformer::core::{LevelPhase, LevelSession, SessionEntity, TransitionRequest};
use platformer::player::{Grounded, Hero};
use platformer::ui::hud::CoinLabel;
use platformer::world::Door;
use platformer::HeadlessGamePlugin;

const MAX_FRAMES: usize = 60;

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin, HeadlessGamePlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app
}

fn phase(app: &App) -> LevelPhase {
    *app.world().resource::<State<LevelPhase>>().get()
}

fn session(app: &App) -> LevelSession {
    app.world().resource::<LevelSession>().clone()
}

/// Step the app until the condition holds.
fn run_until(app: &mut App, condition: impl Fn(&App) -> bool) {
    for _ in 0..MAX_FRAMES {
        if condition(app) {
            return;
        }
        app.update();
    }
    panic!("condition not reached within {} frames", MAX_FRAMES);
}

fn running_level(app: &mut App, level: usize) {
    run_until(app, |app| {
        phase(app) == LevelPhase::Running
            && app
                .world()
                .get_resource::<LevelSession>()
                .is_some_and(|s| s.level == level)
    });
}

fn started_app() -> App {
    let mut app = headless_app();
    running_level(&mut app, 0);
    app
}

fn entities_of(app: &mut App, category: Category) -> Vec<Entity> {
    let mut query = app.world_mut().query::<(Entity, &Category)>();
    query
        .iter(app.world())
        .filter(|(_, c)| **c == category)
        .map(|(entity, _)| entity)
        .collect()
}

fn hero(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<Hero>>();
    query.single(app.world())
}

fn overlap(app: &mut App, a: Entity, b: Entity) {
    app.world_mut().resource_mut::<Overlaps>().record(a, b);
}

#[test]
fn first_level_starts_with_fresh_session() {
    let mut app = started_app();

    assert_eq!(session(&app), LevelSession::new(0));
    assert_eq!(entities_of(&mut app, Category::Door).len(), 1);
    assert_eq!(entities_of(&mut app, Category::Key).len(), 1);
    hero(&mut app);
}

#[test]
fn three_coins_count_three() {
    let mut app = started_app();
    let hero = hero(&mut app);
    let coins = entities_of(&mut app, Category::Coin);
    assert!(coins.len() >= 3);

    for &coin in &coins[..3] {
        overlap(&mut app, hero, coin);
    }
    app.update();

    assert_eq!(session(&app).coins, 3);
    assert_eq!(entities_of(&mut app, Category::Coin).len(), coins.len() - 3);

    // The HUD catches up on the next frame.
    app.update();
    let mut labels = app.world_mut().query_filtered::<&Text, With<CoinLabel>>();
    assert_eq!(labels.single(app.world()).0, "X3");
}

#[test]
fn advance_moves_on_and_wraps_around() {
    let mut app = started_app();

    app.world_mut().send_event(TransitionRequest::Advance);
    running_level(&mut app, 1);
    assert_eq!(session(&app), LevelSession::new(1));

    app.world_mut().send_event(TransitionRequest::Advance);
    running_level(&mut app, 0);
}

#[test]
fn restart_keeps_level_and_resets_counters() {
    let mut app = started_app();
    let hero = hero(&mut app);
    let coin = entities_of(&mut app, Category::Coin)[0];
    overlap(&mut app, hero, coin);
    app.update();
    assert_eq!(session(&app).coins, 1);

    app.world_mut().send_event(TransitionRequest::Restart);
    run_until(&mut app, |app| phase(app) == LevelPhase::Transitioning);
    running_level(&mut app, 0);

    assert_eq!(session(&app), LevelSession::new(0));
}

#[test]
fn only_first_request_of_a_frame_counts() {
    let mut app = started_app();

    app.world_mut().send_event(TransitionRequest::Restart);
    app.world_mut().send_event(TransitionRequest::Advance);
    run_until(&mut app, |app| phase(app) == LevelPhase::Transitioning);
    running_level(&mut app, 0);
}

#[test]
fn touching_enemy_kills_hero_and_restarts() {
    let mut app = started_app();
    let hero = hero(&mut app);
    let enemy = entities_of(&mut app, Category::Enemy)[0];

    overlap(&mut app, hero, enemy);
    app.update();
    assert!(!app.world().get::<Hero>(hero).unwrap().alive);

    run_until(&mut app, |app| phase(app) == LevelPhase::Transitioning);
    running_level(&mut app, 0);
    assert!(app.world().get_entity(hero).is_err());
}

#[test]
fn key_then_door_advances_to_next_level() {
    let mut app = started_app();
    let hero = hero(&mut app);
    let key = entities_of(&mut app, Category::Key)[0];
    let door = entities_of(&mut app, Category::Door)[0];

    overlap(&mut app, hero, key);
    app.update();
    assert!(session(&app).has_key);

    app.world_mut().get_mut::<Grounded>(hero).unwrap().0 = true;
    overlap(&mut app, hero, door);
    app.update();
    assert!(app.world().get::<Door>(door).unwrap().is_open());
    assert!(app.world().get::<Hero>(hero).unwrap().frozen);

    running_level(&mut app, 1);

    let mut stale = app
        .world_mut()
        .query_filtered::<Entity, With<SessionEntity>>();
    assert!(stale.iter(app.world()).all(|entity| entity != door));
}
