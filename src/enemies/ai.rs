//! Enemy patrol behaviour.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Enemy, PatrolContacts};
use crate::collision::{sense_groups, Category};
use crate::core::{ActorDestroyed, ActorKind, GameConfig};

/// How far past its side a patrol ray reaches.
const CONTACT_SKIN: f32 = 2.0;

/// Horizontal patrol velocity for the next frame.
///
/// Turn around on a side contact; otherwise keep going the current way,
/// starting to the right from rest.
pub fn patrol_velocity(vx: f32, contacts: PatrolContacts, speed: f32) -> f32 {
    if contacts.right {
        -speed
    } else if contacts.left {
        speed
    } else if vx < 0.0 {
        -speed
    } else {
        speed
    }
}

/// Apply patrol motion to living enemies.
pub fn patrol(
    config: Res<GameConfig>,
    mut enemies: Query<(&Enemy, &PatrolContacts, &mut Velocity)>,
) {
    for (enemy, contacts, mut velocity) in enemies.iter_mut() {
        if !enemy.alive {
            continue;
        }
        velocity.linvel.x = patrol_velocity(velocity.linvel.x, *contacts, config.enemy.speed);
    }
}

/// Ray cast sideways against platforms, enemy walls, and level bounds.
pub fn sense_patrol_contacts(
    rapier_context: Query<&RapierContext>,
    config: Res<GameConfig>,
    mut enemies: Query<(Entity, &Transform, &mut PatrolContacts), With<Enemy>>,
) {
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    let reach = config.enemy.size.width / 2.0 + CONTACT_SKIN;
    let groups = sense_groups(&[Category::Platform, Category::EnemyWall, Category::Bounds]);

    for (entity, transform, mut contacts) in enemies.iter_mut() {
        let origin = transform.translation.truncate();
        let filter = QueryFilter::default().exclude_collider(entity).groups(groups);

        contacts.left = context.cast_ray(origin, Vec2::NEG_X, reach, true, filter).is_some();
        contacts.right = context.cast_ray(origin, Vec2::X, reach, true, filter).is_some();
    }
}

/// Remove a stomped enemy from the level right away.
pub fn kill_enemy(world: &mut World, enemy: Entity) {
    let Ok(mut entity) = world.get_entity_mut(enemy) else {
        return;
    };
    if let Some(mut enemy) = entity.get_mut::<Enemy>() {
        enemy.die();
    }
    entity.despawn_recursive();
    world.send_event(ActorDestroyed {
        entity: enemy,
        kind: ActorKind::Enemy,
    });
}
