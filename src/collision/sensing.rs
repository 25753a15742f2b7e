//! Adapter over the Rapier scene queries.
//!
//! Runs once per frame after the physics writeback and records what the
//! resolution step needs: which pairs overlap and which heroes stand on
//! something.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::table::{sense_groups, Category, CollisionTable};
use crate::core::GameConfig;
use crate::player::{Grounded, Hero};

/// Inset of the feet rays from the collider edges.
const FOOT_INSET: f32 = 2.0;
/// How far below the feet a platform still counts as ground.
const GROUND_SKIN: f32 = 2.0;

/// Overlapping entity pairs found this frame.
#[derive(Resource, Debug, Default)]
pub struct Overlaps {
    pairs: Vec<(Entity, Entity)>,
}

impl Overlaps {
    /// Record an unordered pair once.
    pub fn record(&mut self, a: Entity, b: Entity) {
        let known = self
            .pairs
            .iter()
            .any(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a));
        if !known {
            self.pairs.push((a, b));
        }
    }

    pub fn pairs(&self) -> &[(Entity, Entity)] {
        &self.pairs
    }

    pub fn take(&mut self) -> Vec<(Entity, Entity)> {
        std::mem::take(&mut self.pairs)
    }
}

/// Intersect each active hero's collider with the scene.
pub fn sense_overlaps(
    rapier_context: Query<&RapierContext>,
    table: Res<CollisionTable>,
    heroes: Query<(Entity, &Transform, &Collider, &Hero)>,
    mut overlaps: ResMut<Overlaps>,
) {
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    let groups = sense_groups(&table.overlap_partners(Category::Player));

    for (entity, transform, collider, hero) in heroes.iter() {
        if !hero.is_active() {
            continue;
        }

        let filter = QueryFilter::default().exclude_collider(entity).groups(groups);
        context.intersections_with_shape(
            transform.translation.truncate(),
            0.0,
            collider,
            filter,
            |other| {
                overlaps.record(entity, other);
                true // Continue checking other entities
            },
        );
    }
}

/// Ray cast below each hero's feet against platforms.
///
/// Frozen and dead heroes have no physics body and are never grounded.
pub fn sense_ground(
    rapier_context: Query<&RapierContext>,
    config: Res<GameConfig>,
    mut heroes: Query<(Entity, &Transform, &Hero, &mut Grounded)>,
) {
    let context = rapier_context.get_single().ok();
    let half = config.hero.size.half_extents();
    let filter_groups = sense_groups(&[Category::Platform]);

    for (entity, transform, hero, mut grounded) in heroes.iter_mut() {
        if !hero.is_active() {
            grounded.0 = false;
            continue;
        }
        let Some(context) = context else {
            continue;
        };

        let feet = transform.translation.truncate() - Vec2::new(0.0, half.y - FOOT_INSET);
        let filter = QueryFilter::default()
            .exclude_collider(entity)
            .groups(filter_groups);

        grounded.0 = [-half.x + FOOT_INSET, 0.0, half.x - FOOT_INSET]
            .into_iter()
            .any(|dx| {
                context
                    .cast_ray(
                        feet + Vec2::new(dx, 0.0),
                        Vec2::NEG_Y,
                        FOOT_INSET + GROUND_SKIN,
                        true,
                        filter,
                    )
                    .is_some()
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_recorded_once_in_either_order() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut overlaps = Overlaps::default();
        overlaps.record(a, b);
        overlaps.record(b, a);
        overlaps.record(a, b);

        assert_eq!(overlaps.pairs(), &[(a, b)]);
        assert_eq!(overlaps.take(), vec![(a, b)]);
        assert!(overlaps.pairs().is_empty());
    }

    #[test]
    fn frozen_hero_loses_ground_contact() {
        let mut app = App::new();
        app.init_resource::<GameConfig>()
            .add_systems(Update, sense_ground);

        let mut hero = Hero::default();
        hero.freeze();
        let frozen = app
            .world_mut()
            .spawn((hero, Transform::default(), Grounded(true)))
            .id();

        app.update();

        assert_eq!(app.world().get::<Grounded>(frozen), Some(&Grounded(false)));
    }
}
