//! Route this frame's overlaps through the collision table.

use bevy::prelude::*;

use super::effects::FallingHeroes;
use super::sensing::Overlaps;
use super::table::{Category, CollisionRule, CollisionTable, Resolution};
use crate::enemies::Enemy;
use crate::player::Hero;

/// Evaluate every overlap rule against the overlapping pairs, in table order.
///
/// A pair is skipped once either entity has been despawned or has left the
/// simulation (dead, or a frozen hero), so an effect never fires twice for a
/// consumed pickup within one frame. Which heroes are falling is decided once,
/// before the first effect runs.
pub fn resolve_collisions(world: &mut World) {
    let pairs = world.resource_mut::<Overlaps>().take();
    if pairs.is_empty() {
        return;
    }

    let falling = FallingHeroes::snapshot(world, &pairs);
    world.insert_resource(falling);

    let rules: Vec<CollisionRule> = world
        .resource::<CollisionTable>()
        .overlap_rules()
        .copied()
        .collect();

    for rule in &rules {
        let Resolution::Overlap { guard, effect } = rule.resolution else {
            continue;
        };
        let (first, second) = rule.pair.categories();

        for &(a, b) in &pairs {
            let Some((x, y)) = orient(world, a, b, first, second) else {
                continue;
            };
            if !takes_part(world, x) || !takes_part(world, y) {
                continue;
            }
            if guard.is_some_and(|guard| !guard(world, x, y)) {
                continue;
            }

            debug!("{:?} overlap: {:?} x {:?}", rule.pair, x, y);
            effect(world, x, y);
        }
    }
}

/// Order a pair to match the rule's categories, if it matches at all.
fn orient(
    world: &World,
    a: Entity,
    b: Entity,
    first: Category,
    second: Category,
) -> Option<(Entity, Entity)> {
    let category_a = *world.get::<Category>(a)?;
    let category_b = *world.get::<Category>(b)?;

    if (category_a, category_b) == (first, second) {
        Some((a, b))
    } else if (category_b, category_a) == (first, second) {
        Some((b, a))
    } else {
        None
    }
}

fn takes_part(world: &World, entity: Entity) -> bool {
    let hero_active = world.get::<Hero>(entity).map_or(true, Hero::is_active);
    let enemy_alive = world.get::<Enemy>(entity).map_or(true, |enemy| enemy.alive);
    hero_active && enemy_alive
}

#[cfg(test)]
mod tests {
    use bevy_rapier2d::prelude::{RigidBodyDisabled, Velocity};

    use super::*;
    use crate::core::{ActorDestroyed, GameConfig, LevelSession, PlayOnce, SoundCue, Tween};
    use crate::player::Grounded;
    use crate::world::Door;

    struct Fixture {
        world: World,
        hero: Entity,
    }

    impl Fixture {
        fn new(hero_velocity: Vec2, grounded: bool) -> Self {
            let mut world = World::new();
            world.init_resource::<Events<SoundCue>>();
            world.init_resource::<Events<ActorDestroyed>>();
            world.init_resource::<GameConfig>();
            world.init_resource::<CollisionTable>();
            world.init_resource::<Overlaps>();
            world.insert_resource(LevelSession::new(0));

            let hero = world
                .spawn((
                    Hero::default(),
                    Category::Player,
                    Grounded(grounded),
                    Velocity::linear(hero_velocity),
                    Transform::from_xyz(10.0, 20.0, 5.0),
                ))
                .id();

            Self { world, hero }
        }

        fn spawn(&mut self, category: Category) -> Entity {
            self.world
                .spawn((category, Transform::from_xyz(40.0, 20.0, 3.0)))
                .id()
        }

        fn overlap(&mut self, other: Entity) {
            self.world.resource_mut::<Overlaps>().record(self.hero, other);
            resolve_collisions(&mut self.world);
        }

        fn session(&self) -> &LevelSession {
            self.world.resource::<LevelSession>()
        }

        fn exists(&self, entity: Entity) -> bool {
            self.world.get_entity(entity).is_ok()
        }
    }

    #[test]
    fn coin_is_collected_exactly_once() {
        let mut fixture = Fixture::new(Vec2::ZERO, true);
        let coin = fixture.spawn(Category::Coin);

        fixture.overlap(coin);
        assert_eq!(fixture.session().coins, 1);
        assert!(!fixture.exists(coin));

        // A stale pair for the same coin changes nothing.
        fixture.overlap(coin);
        assert_eq!(fixture.session().coins, 1);
    }

    #[test]
    fn duplicate_pair_in_one_frame_counts_once() {
        let mut fixture = Fixture::new(Vec2::ZERO, true);
        let coin = fixture.spawn(Category::Coin);
        let hero = fixture.hero;

        fixture.world.resource_mut::<Overlaps>().record(coin, hero);
        fixture.overlap(coin);

        assert_eq!(fixture.session().coins, 1);
    }

    #[test]
    fn key_sets_flag_and_disappears() {
        let mut fixture = Fixture::new(Vec2::ZERO, true);
        let key = fixture.spawn(Category::Key);

        fixture.overlap(key);

        assert!(fixture.session().has_key);
        assert!(!fixture.exists(key));
    }

    #[test]
    fn door_stays_shut_without_key() {
        let mut fixture = Fixture::new(Vec2::ZERO, true);
        let door = fixture.spawn(Category::Door);
        fixture.world.entity_mut(door).insert(Door::default());

        fixture.overlap(door);

        assert!(!fixture.world.get::<Door>(door).unwrap().is_open());
        assert!(fixture.world.get::<Tween>(fixture.hero).is_none());
    }

    #[test]
    fn door_stays_shut_while_airborne() {
        let mut fixture = Fixture::new(Vec2::new(0.0, 300.0), false);
        fixture.world.resource_mut::<LevelSession>().collect_key();
        let door = fixture.spawn(Category::Door);
        fixture.world.entity_mut(door).insert(Door::default());

        fixture.overlap(door);

        assert!(!fixture.world.get::<Door>(door).unwrap().is_open());
    }

    #[test]
    fn door_opens_once_for_grounded_key_holder() {
        let mut fixture = Fixture::new(Vec2::ZERO, true);
        fixture.world.resource_mut::<LevelSession>().collect_key();
        let door = fixture.spawn(Category::Door);
        fixture.world.entity_mut(door).insert(Door::default());

        fixture.overlap(door);

        assert!(fixture.world.get::<Door>(door).unwrap().is_open());
        let hero = fixture.world.get::<Hero>(fixture.hero).unwrap();
        assert!(hero.frozen);
        let tween = fixture.world.get::<Tween>(fixture.hero).unwrap();
        assert_eq!(tween.to, Vec2::new(40.0, 20.0));
        assert!(fixture.world.get::<RigidBodyDisabled>(fixture.hero).is_some());

        // Second overlap: the frozen hero no longer takes part.
        fixture.world.entity_mut(fixture.hero).remove::<Tween>();
        fixture.overlap(door);
        assert!(fixture.world.get::<Tween>(fixture.hero).is_none());
        assert_eq!(fixture.world.resource::<Events<SoundCue>>().len(), 1);
    }

    #[test]
    fn falling_hero_stomps_enemy() {
        let mut fixture = Fixture::new(Vec2::new(0.0, -150.0), false);
        let enemy = fixture.spawn(Category::Enemy);
        fixture.world.entity_mut(enemy).insert(Enemy::default());

        fixture.overlap(enemy);

        assert!(!fixture.exists(enemy));
        assert_eq!(fixture.world.resource::<Events<ActorDestroyed>>().len(), 1);
        let hero = fixture.world.get::<Hero>(fixture.hero).unwrap();
        assert!(hero.alive);
        let velocity = fixture.world.get::<Velocity>(fixture.hero).unwrap();
        assert_eq!(velocity.linvel.y, 200.0);
    }

    #[test]
    fn one_fall_stomps_every_enemy_below() {
        let mut fixture = Fixture::new(Vec2::new(0.0, -150.0), false);
        let enemies = [fixture.spawn(Category::Enemy), fixture.spawn(Category::Enemy)];
        for enemy in enemies {
            fixture.world.entity_mut(enemy).insert(Enemy::default());
            let hero = fixture.hero;
            fixture.world.resource_mut::<Overlaps>().record(hero, enemy);
        }

        resolve_collisions(&mut fixture.world);

        assert!(enemies.iter().all(|&enemy| !fixture.exists(enemy)));
        assert!(fixture.world.get::<Hero>(fixture.hero).unwrap().alive);
        assert_eq!(fixture.world.resource::<Events<ActorDestroyed>>().len(), 2);
        let velocity = fixture.world.get::<Velocity>(fixture.hero).unwrap();
        assert_eq!(velocity.linvel.y, 200.0);
    }

    #[test]
    fn resting_jitter_is_not_a_stomp() {
        let mut fixture = Fixture::new(Vec2::new(0.0, -0.001), true);
        let enemy = fixture.spawn(Category::Enemy);
        fixture.world.entity_mut(enemy).insert(Enemy::default());

        fixture.overlap(enemy);

        assert!(fixture.exists(enemy));
        assert!(!fixture.world.get::<Hero>(fixture.hero).unwrap().alive);
    }

    #[test]
    fn hero_not_falling_dies_on_contact() {
        for vy in [0.0, 250.0] {
            let mut fixture = Fixture::new(Vec2::new(0.0, vy), true);
            let enemy = fixture.spawn(Category::Enemy);
            fixture.world.entity_mut(enemy).insert(Enemy::default());

            fixture.overlap(enemy);

            assert!(fixture.exists(enemy));
            assert!(fixture.world.get::<Enemy>(enemy).unwrap().alive);
            let hero = fixture.world.get::<Hero>(fixture.hero).unwrap();
            assert!(!hero.alive);
            assert!(fixture.world.get::<PlayOnce>(fixture.hero).is_some());
        }
    }

    #[test]
    fn dead_hero_collects_nothing() {
        let mut fixture = Fixture::new(Vec2::ZERO, true);
        fixture.world.get_mut::<Hero>(fixture.hero).unwrap().die();
        let coin = fixture.spawn(Category::Coin);

        fixture.overlap(coin);

        assert_eq!(fixture.session().coins, 0);
        assert!(fixture.exists(coin));
    }

    #[test]
    fn unrelated_categories_are_ignored() {
        let mut fixture = Fixture::new(Vec2::ZERO, true);
        let platform = fixture.spawn(Category::Platform);

        fixture.overlap(platform);

        assert!(fixture.exists(platform));
        assert_eq!(fixture.session(), &LevelSession::new(0));
    }
}
