//! Overlap effects referenced by the collision table.
//!
//! Effects run inside the exclusive resolution system and receive the two
//! entities in the order of their rule's categories.

use bevy::prelude::*;
use bevy_rapier2d::prelude::{RigidBodyDisabled, Velocity};

use crate::core::{GameConfig, LevelSession, SoundCue, Tween, TweenTag};
use crate::enemies::kill_enemy;
use crate::player::{is_falling, kill_hero, Grounded, Hero};
use crate::world::Door;

/// Heroes that were moving down when this frame's overlaps were taken.
///
/// Filled before any effect runs; a stomp bounce later in the same frame does
/// not change how the hero meets the next enemy.
#[derive(Resource, Debug, Default)]
pub struct FallingHeroes {
    heroes: Vec<Entity>,
}

impl FallingHeroes {
    pub fn snapshot(world: &World, pairs: &[(Entity, Entity)]) -> Self {
        let mut heroes = Vec::new();
        for entity in pairs.iter().flat_map(|&(a, b)| [a, b]) {
            if heroes.contains(&entity) || world.get::<Hero>(entity).is_none() {
                continue;
            }
            if world
                .get::<Velocity>(entity)
                .is_some_and(|velocity| is_falling(velocity.linvel))
            {
                heroes.push(entity);
            }
        }
        Self { heroes }
    }

    pub fn contains(&self, hero: Entity) -> bool {
        self.heroes.contains(&hero)
    }
}

/// Player picks up a coin.
pub fn collect_coin(world: &mut World, _player: Entity, coin: Entity) {
    world.send_event(SoundCue::Coin);
    world.entity_mut(coin).despawn_recursive();

    if let Some(mut session) = world.get_resource_mut::<LevelSession>() {
        session.collect_coin();
    }
}

/// Player picks up the key.
pub fn collect_key(world: &mut World, _player: Entity, key: Entity) {
    world.send_event(SoundCue::Key);
    world.entity_mut(key).despawn_recursive();

    if let Some(mut session) = world.get_resource_mut::<LevelSession>() {
        session.collect_key();
    }
}

/// The door only reacts to a grounded player holding the key.
pub fn door_unlocked(world: &World, player: Entity, door: Entity) -> bool {
    let has_key = world
        .get_resource::<LevelSession>()
        .is_some_and(|session| session.has_key);
    let grounded = world.get::<Grounded>(player).is_some_and(|grounded| grounded.0);
    let closed = world.get::<Door>(door).is_some_and(|door| !door.is_open());

    has_key && grounded && closed
}

/// Open the door and walk the frozen player into it.
pub fn enter_door(world: &mut World, player: Entity, door: Entity) {
    let Some(door_x) = world.get::<Transform>(door).map(|t| t.translation.x) else {
        return;
    };
    if let Some(mut door) = world.get_mut::<Door>(door) {
        door.open();
    }
    world.send_event(SoundCue::Door);

    let secs = world.resource::<GameConfig>().door_entry_secs;
    let mut entity = world.entity_mut(player);

    if let Some(mut hero) = entity.get_mut::<Hero>() {
        hero.freeze();
    }
    let start = entity
        .get::<Transform>()
        .map(|t| t.translation.truncate())
        .unwrap_or_default();
    let end = Vec2::new(door_x, start.y);

    entity.insert((
        RigidBodyDisabled,
        Tween::new(TweenTag::DoorEntry, start, end, secs).with_alpha(1.0, 0.0),
    ));
}

/// Stomp the enemy when falling onto it, otherwise the player dies.
pub fn player_meets_enemy(world: &mut World, player: Entity, enemy: Entity) {
    world.send_event(SoundCue::Stomp);

    let falling = world
        .get_resource::<FallingHeroes>()
        .is_some_and(|falling| falling.contains(player));

    if falling {
        let bounce_speed = world.resource::<GameConfig>().hero.bounce_speed;
        if let Some(mut velocity) = world.get_mut::<Velocity>(player) {
            Hero::bounce(&mut velocity, bounce_speed);
        }
        kill_enemy(world, enemy);
    } else {
        kill_hero(world, player);
    }
}
