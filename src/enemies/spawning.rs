//! Enemy spawning.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Enemy, PatrolContacts};
use crate::collision::{physics_groups, Category, CollisionTable};
use crate::core::{Clip, GameConfig, SessionEntity, SpriteAnimation};
use crate::rendering::SpriteAssets;

/// Draw order of enemy sprites.
pub const ENEMY_Z: f32 = 4.0;

/// Spawn a patrolling enemy at a world position.
pub fn spawn_enemy(
    commands: &mut Commands,
    position: Vec2,
    sprites: &SpriteAssets,
    config: &GameConfig,
    table: &CollisionTable,
) -> Entity {
    let half = config.enemy.size.half_extents();

    commands
        .spawn((
            Enemy::default(),
            PatrolContacts::default(),
            Category::Enemy,
            SessionEntity,
            SpriteAnimation::new(Clip::EnemyCrawl),
            Sprite::from_atlas_image(
                sprites.enemy.clone(),
                TextureAtlas {
                    layout: sprites.enemy_layout.clone(),
                    index: 0,
                },
            ),
            Transform::from_translation(position.extend(ENEMY_Z)),
            RigidBody::Dynamic,
            Collider::cuboid(half.x, half.y),
            LockedAxes::ROTATION_LOCKED,
            Velocity::linear(Vec2::new(config.enemy.speed, 0.0)),
            Friction::coefficient(0.0),
            physics_groups(table, Category::Enemy),
        ))
        .id()
}
