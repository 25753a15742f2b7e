//! Collision categories and the collision resolution table.
//!
//! Each row names a pair of categories and how contacts between them are
//! resolved: either as a solid contact the physics engine handles on its own,
//! or as an overlap routed to an effect function once per frame.

use bevy::prelude::*;
use bevy_rapier2d::prelude::{CollisionGroups, Group, SolverGroups};

use super::effects;

/// Collision category of a level entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Player,
    Enemy,
    Platform,
    EnemyWall,
    Bounds,
    Coin,
    Key,
    Door,
}

impl Category {
    /// Physics group bit of the category.
    pub fn group(self) -> Group {
        match self {
            Category::Player => Group::GROUP_1,
            Category::Enemy => Group::GROUP_2,
            Category::Platform => Group::GROUP_3,
            Category::EnemyWall => Group::GROUP_4,
            Category::Bounds => Group::GROUP_5,
            Category::Coin => Group::GROUP_6,
            Category::Key => Group::GROUP_7,
            Category::Door => Group::GROUP_8,
        }
    }
}

/// Named entity-pair categories with a collision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionPair {
    PlayerPlatform,
    PlayerBounds,
    EnemyPlatform,
    EnemyWall,
    EnemyBounds,
    PlayerCoin,
    PlayerEnemy,
    PlayerKey,
    PlayerDoor,
}

impl CollisionPair {
    /// The two categories, in the order effects receive them.
    pub fn categories(self) -> (Category, Category) {
        match self {
            CollisionPair::PlayerPlatform => (Category::Player, Category::Platform),
            CollisionPair::PlayerBounds => (Category::Player, Category::Bounds),
            CollisionPair::EnemyPlatform => (Category::Enemy, Category::Platform),
            CollisionPair::EnemyWall => (Category::Enemy, Category::EnemyWall),
            CollisionPair::EnemyBounds => (Category::Enemy, Category::Bounds),
            CollisionPair::PlayerCoin => (Category::Player, Category::Coin),
            CollisionPair::PlayerEnemy => (Category::Player, Category::Enemy),
            CollisionPair::PlayerKey => (Category::Player, Category::Key),
            CollisionPair::PlayerDoor => (Category::Player, Category::Door),
        }
    }

    fn involves(self, category: Category) -> Option<Category> {
        let (a, b) = self.categories();
        if a == category {
            Some(b)
        } else if b == category {
            Some(a)
        } else {
            None
        }
    }
}

/// Precondition checked before an overlap effect runs.
pub type Guard = fn(&World, Entity, Entity) -> bool;

/// Gameplay effect of an overlap between two entities.
pub type Effect = fn(&mut World, Entity, Entity);

/// How contacts of a pair are resolved.
#[derive(Clone, Copy)]
pub enum Resolution {
    /// Blocking contact, resolved by the physics engine.
    Solid,
    /// Non-blocking intersection routed to an effect.
    Overlap { guard: Option<Guard>, effect: Effect },
}

/// One row of the table.
#[derive(Clone, Copy)]
pub struct CollisionRule {
    pub pair: CollisionPair,
    pub resolution: Resolution,
}

impl CollisionRule {
    pub fn solid(pair: CollisionPair) -> Self {
        Self {
            pair,
            resolution: Resolution::Solid,
        }
    }

    pub fn overlap(pair: CollisionPair, guard: Option<Guard>, effect: Effect) -> Self {
        Self {
            pair,
            resolution: Resolution::Overlap { guard, effect },
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self.resolution, Resolution::Solid)
    }
}

/// Every collision rule of the game, evaluated in order.
#[derive(Resource, Clone)]
pub struct CollisionTable {
    rules: Vec<CollisionRule>,
}

impl Default for CollisionTable {
    fn default() -> Self {
        Self::new(vec![
            CollisionRule::solid(CollisionPair::PlayerPlatform),
            CollisionRule::solid(CollisionPair::PlayerBounds),
            CollisionRule::solid(CollisionPair::EnemyPlatform),
            CollisionRule::solid(CollisionPair::EnemyWall),
            CollisionRule::solid(CollisionPair::EnemyBounds),
            CollisionRule::overlap(CollisionPair::PlayerCoin, None, effects::collect_coin),
            CollisionRule::overlap(CollisionPair::PlayerEnemy, None, effects::player_meets_enemy),
            CollisionRule::overlap(CollisionPair::PlayerKey, None, effects::collect_key),
            CollisionRule::overlap(
                CollisionPair::PlayerDoor,
                Some(effects::door_unlocked),
                effects::enter_door,
            ),
        ])
    }
}

impl CollisionTable {
    pub fn new(rules: Vec<CollisionRule>) -> Self {
        Self { rules }
    }

    /// Overlap rows in evaluation order.
    pub fn overlap_rules(&self) -> impl Iterator<Item = &CollisionRule> {
        self.rules.iter().filter(|rule| !rule.is_solid())
    }

    /// Categories a category has a solid rule with.
    pub fn solid_partners(&self, category: Category) -> Vec<Category> {
        self.partners(category, true)
    }

    /// Categories a category has an overlap rule with.
    pub fn overlap_partners(&self, category: Category) -> Vec<Category> {
        self.partners(category, false)
    }

    fn partners(&self, category: Category, solid: bool) -> Vec<Category> {
        self.rules
            .iter()
            .filter(|rule| rule.is_solid() == solid)
            .filter_map(|rule| rule.pair.involves(category))
            .collect()
    }
}

fn union(categories: &[Category]) -> Group {
    categories
        .iter()
        .fold(Group::NONE, |groups, category| groups | category.group())
}

/// Physics groups of a category: it is detected against every partner in the
/// table, but only pushed apart from its solid partners.
pub fn physics_groups(table: &CollisionTable, category: Category) -> (CollisionGroups, SolverGroups) {
    let solid = union(&table.solid_partners(category));
    let detected = solid | union(&table.overlap_partners(category));

    (
        CollisionGroups::new(category.group(), detected),
        SolverGroups::new(category.group(), solid),
    )
}

/// Scene query groups that only hit the given categories.
pub fn sense_groups(categories: &[Category]) -> CollisionGroups {
    CollisionGroups::new(Group::ALL, union(categories))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_walls_only_block_enemies() {
        let table = CollisionTable::default();

        assert_eq!(table.solid_partners(Category::EnemyWall), vec![Category::Enemy]);
        assert!(!table.solid_partners(Category::Player).contains(&Category::EnemyWall));
        assert!(!table.overlap_partners(Category::Player).contains(&Category::EnemyWall));
    }

    #[test]
    fn player_and_enemy_overlap_without_blocking() {
        let table = CollisionTable::default();
        let (collision, solver) = physics_groups(&table, Category::Player);

        assert!(collision.filters.contains(Category::Enemy.group()));
        assert!(!solver.filters.contains(Category::Enemy.group()));
        assert!(solver.filters.contains(Category::Platform.group()));
    }

    #[test]
    fn only_the_door_rule_is_guarded() {
        let table = CollisionTable::default();

        for rule in table.overlap_rules() {
            let Resolution::Overlap { guard, .. } = rule.resolution else {
                unreachable!();
            };
            assert_eq!(guard.is_some(), rule.pair == CollisionPair::PlayerDoor);
        }
    }

    #[test]
    fn overlap_rules_keep_table_order() {
        let pairs: Vec<_> = CollisionTable::default()
            .overlap_rules()
            .map(|rule| rule.pair)
            .collect();

        assert_eq!(
            pairs,
            vec![
                CollisionPair::PlayerCoin,
                CollisionPair::PlayerEnemy,
                CollisionPair::PlayerKey,
                CollisionPair::PlayerDoor,
            ]
        );
    }
}
