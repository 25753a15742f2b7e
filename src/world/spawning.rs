//! Entity spawning for a planned level.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::builder::{LevelPlan, Placement, PlacementKind};
use super::components::{Decoration, Door};
use crate::collision::{physics_groups, Category, CollisionTable};
use crate::core::{Clip, GameConfig, SessionEntity, SpriteAnimation};
use crate::enemies::spawn_enemy;
use crate::player::spawn_hero;
use crate::rendering::{Bob, SpriteAssets};

pub const BACKGROUND_Z: f32 = 0.0;
pub const DECORATION_Z: f32 = 1.0;
pub const PLATFORM_Z: f32 = 2.0;
pub const PICKUP_Z: f32 = 3.0;

/// Spawn every placement of a plan. Returns the hero, if the plan has one.
pub fn spawn_level(
    commands: &mut Commands,
    plan: &LevelPlan,
    sprites: &SpriteAssets,
    config: &GameConfig,
    table: &CollisionTable,
) -> Option<Entity> {
    let mut hero = None;

    for placement in &plan.placements {
        match &placement.kind {
            PlacementKind::Background => {
                commands.spawn((
                    sized_sprite(sprites.background.clone(), placement.size),
                    Transform::from_translation(placement.center.extend(BACKGROUND_Z)),
                    SessionEntity,
                ));
            }
            PlacementKind::Decoration { frame } => {
                commands.spawn((
                    Decoration,
                    atlas_sprite(&sprites.decoration, &sprites.decoration_layout, *frame),
                    Transform::from_translation(placement.center.extend(DECORATION_Z)),
                    SessionEntity,
                ));
            }
            PlacementKind::Platform { image } => {
                let texture = sprites.platforms.get(image).cloned().unwrap_or_default();
                commands.spawn((
                    sized_sprite(texture, placement.size),
                    Transform::from_translation(placement.center.extend(PLATFORM_Z)),
                    SessionEntity,
                    solid(placement, Category::Platform, table),
                ));
            }
            PlacementKind::EnemyWall => {
                commands.spawn((
                    Transform::from_translation(placement.center.extend(PLATFORM_Z)),
                    Visibility::Hidden,
                    SessionEntity,
                    solid(placement, Category::EnemyWall, table),
                ));
            }
            PlacementKind::Bounds => {
                commands.spawn((
                    Transform::from_translation(placement.center.extend(PLATFORM_Z)),
                    Visibility::Hidden,
                    SessionEntity,
                    solid(placement, Category::Bounds, table),
                ));
            }
            PlacementKind::Coin => {
                commands.spawn((
                    SpriteAnimation::new(Clip::CoinRotate),
                    atlas_sprite(&sprites.coin, &sprites.coin_layout, 0),
                    Transform::from_translation(placement.center.extend(PICKUP_Z)),
                    SessionEntity,
                    sensor(placement, Category::Coin, table),
                ));
            }
            PlacementKind::Key => {
                commands.spawn((
                    Bob::new(placement.center.y),
                    Sprite::from_image(sprites.key.clone()),
                    Transform::from_translation(placement.center.extend(PICKUP_Z)),
                    SessionEntity,
                    sensor(placement, Category::Key, table),
                ));
            }
            PlacementKind::Door => {
                commands.spawn((
                    Door::default(),
                    atlas_sprite(&sprites.door, &sprites.door_layout, 0),
                    Transform::from_translation(placement.center.extend(PICKUP_Z)),
                    SessionEntity,
                    sensor(placement, Category::Door, table),
                ));
            }
            PlacementKind::Hero => {
                hero = Some(spawn_hero(commands, placement.center, sprites, config, table));
            }
            PlacementKind::Enemy => {
                spawn_enemy(commands, placement.center, sprites, config, table);
            }
        }
    }

    info!("Spawned {} level placements", plan.placements.len());
    hero
}

fn sized_sprite(image: Handle<Image>, size: Vec2) -> Sprite {
    Sprite {
        image,
        custom_size: Some(size),
        ..default()
    }
}

fn atlas_sprite(image: &Handle<Image>, layout: &Handle<TextureAtlasLayout>, index: usize) -> Sprite {
    Sprite::from_atlas_image(
        image.clone(),
        TextureAtlas {
            layout: layout.clone(),
            index,
        },
    )
}

/// Immovable blocking body.
fn solid(
    placement: &Placement,
    category: Category,
    table: &CollisionTable,
) -> (Category, RigidBody, Collider, CollisionGroups, SolverGroups) {
    let (collision, solver) = physics_groups(table, category);
    (
        category,
        RigidBody::Fixed,
        Collider::cuboid(placement.size.x / 2.0, placement.size.y / 2.0),
        collision,
        solver,
    )
}

/// Gravity-free pickup or trigger; only ever overlapped.
fn sensor(
    placement: &Placement,
    category: Category,
    table: &CollisionTable,
) -> (Category, Sensor, Collider, CollisionGroups, SolverGroups) {
    let (collision, solver) = physics_groups(table, category);
    (
        category,
        Sensor,
        Collider::cuboid(placement.size.x / 2.0, placement.size.y / 2.0),
        collision,
        solver,
    )
}
