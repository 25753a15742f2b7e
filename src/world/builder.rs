//! Level planning: turn a description into a complete list of placements.
//!
//! Planning is pure and deterministic. The whole plan is computed, and
//! validated, before the first entity is spawned, so a bad description never
//! leaves half a level behind.

use bevy::prelude::*;

use super::data::{LevelDescription, Point};
use super::error::LevelLoadError;
use crate::core::{GameConfig, Size};

/// Thickness of the invisible colliders at the level's left and right edges.
pub const BOUNDS_THICKNESS: f32 = 10.0;

/// What a placement spawns.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementKind {
    Background,
    Decoration { frame: usize },
    Platform { image: String },
    EnemyWall,
    Bounds,
    Coin,
    Door,
    Key,
    Hero,
    Enemy,
}

/// One entity of the level, in world space (y up, origin at level center).
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub kind: PlacementKind,
    pub center: Vec2,
    pub size: Vec2,
}

/// Every placement of a level, in spawn order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LevelPlan {
    pub placements: Vec<Placement>,
}

impl LevelPlan {
    pub fn of_kind(&self, kind: PlacementKind) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |p| p.kind == kind)
    }

    pub fn count(&self, kind: PlacementKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn hero(&self) -> Option<&Placement> {
        self.of_kind(PlacementKind::Hero).next()
    }
}

/// Converts persisted screen coordinates into world space.
#[derive(Debug, Clone, Copy)]
pub struct LevelSpace {
    pub size: Size,
}

impl LevelSpace {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// Screen pixel (y down, origin top-left) to world point.
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x - self.size.width / 2.0,
            self.size.height / 2.0 - screen.y,
        )
    }

    /// World center of a sprite placed at `(x, y)` with the given anchor.
    ///
    /// The anchor is in screen convention: (0, 0) is the top-left corner of
    /// the sprite, (1, 1) the bottom-right.
    pub fn anchored(&self, x: f32, y: f32, size: Size, anchor: Vec2) -> Vec2 {
        let center = Vec2::new(
            x + (0.5 - anchor.x) * size.width,
            y + (0.5 - anchor.y) * size.height,
        );
        self.to_world(center)
    }
}

const TOP_LEFT: Vec2 = Vec2::new(0.0, 0.0);
const CENTER: Vec2 = Vec2::new(0.5, 0.5);
const BOTTOM_CENTER: Vec2 = Vec2::new(0.5, 1.0);
const BOTTOM_LEFT: Vec2 = Vec2::new(0.0, 1.0);
const BOTTOM_RIGHT: Vec2 = Vec2::new(1.0, 1.0);

/// Build the placement list for a level.
pub fn plan_level(level: &LevelDescription, config: &GameConfig) -> Result<LevelPlan, LevelLoadError> {
    let space = LevelSpace::new(config.level_size);
    let sizes = &config.sizes;
    let mut placements = Vec::new();

    let mut place = |kind: PlacementKind, point: Point, size: Size, anchor: Vec2| {
        placements.push(Placement {
            kind,
            center: space.anchored(point.x, point.y, size, anchor),
            size: size.as_vec2(),
        });
    };

    place(
        PlacementKind::Background,
        Point { x: 0.0, y: 0.0 },
        config.level_size,
        TOP_LEFT,
    );

    for decoration in &level.decoration {
        place(
            PlacementKind::Decoration { frame: decoration.frame },
            Point { x: decoration.x, y: decoration.y },
            sizes.decoration,
            TOP_LEFT,
        );
    }

    for (index, platform) in level.platforms.iter().enumerate() {
        let size = config
            .platform_size(&platform.image)
            .ok_or_else(|| LevelLoadError::UnknownPlatformImage {
                index,
                image: platform.image.clone(),
            })?;

        place(
            PlacementKind::Platform { image: platform.image.clone() },
            Point { x: platform.x, y: platform.y },
            size,
            TOP_LEFT,
        );

        // Walls flank the platform's top edge to keep enemies on it
        place(
            PlacementKind::EnemyWall,
            Point { x: platform.x, y: platform.y },
            sizes.enemy_wall,
            BOTTOM_RIGHT,
        );
        place(
            PlacementKind::EnemyWall,
            Point { x: platform.x + size.width, y: platform.y },
            sizes.enemy_wall,
            BOTTOM_LEFT,
        );
    }

    let bounds = Size::new(BOUNDS_THICKNESS, config.level_size.height);
    place(PlacementKind::Bounds, Point { x: 0.0, y: 0.0 }, bounds, Vec2::new(1.0, 0.0));
    place(
        PlacementKind::Bounds,
        Point { x: config.level_size.width, y: 0.0 },
        bounds,
        TOP_LEFT,
    );

    for coin in &level.coins {
        place(PlacementKind::Coin, *coin, sizes.coin, CENTER);
    }

    place(PlacementKind::Door, level.door, sizes.door, BOTTOM_CENTER);

    if let Some(key) = level.key {
        place(PlacementKind::Key, key, sizes.key, CENTER);
    }

    place(PlacementKind::Hero, level.hero, config.hero.size, CENTER);

    for enemy in &level.enemies {
        place(PlacementKind::Enemy, *enemy, config.enemy.size, CENTER);
    }

    Ok(LevelPlan { placements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::data::PlatformRecord;

    fn description() -> LevelDescription {
        LevelDescription {
            hero: Point { x: 21.0, y: 525.0 },
            door: Point { x: 169.0, y: 546.0 },
            key: Some(Point { x: 750.0, y: 524.0 }),
            platforms: vec![
                PlatformRecord { image: "ground".into(), x: 0.0, y: 546.0 },
                PlatformRecord { image: "grass:4x1".into(), x: 420.0, y: 420.0 },
            ],
            decoration: Vec::new(),
            coins: vec![Point { x: 100.0, y: 500.0 }, Point { x: 140.0, y: 500.0 }],
            enemies: vec![Point { x: 500.0, y: 390.0 }],
        }
    }

    #[test]
    fn screen_space_maps_to_centered_world() {
        let space = LevelSpace::new(Size::new(960.0, 600.0));

        assert_eq!(space.to_world(Vec2::new(0.0, 0.0)), Vec2::new(-480.0, 300.0));
        assert_eq!(space.to_world(Vec2::new(480.0, 300.0)), Vec2::ZERO);
        assert_eq!(
            space.anchored(100.0, 200.0, Size::new(20.0, 40.0), TOP_LEFT),
            Vec2::new(-370.0, 80.0)
        );
        assert_eq!(
            space.anchored(100.0, 200.0, Size::new(20.0, 40.0), BOTTOM_CENTER),
            Vec2::new(-380.0, 120.0)
        );
    }

    #[test]
    fn every_platform_gets_two_flanking_walls() {
        let config = GameConfig::default();
        let plan = plan_level(&description(), &config).unwrap();

        assert_eq!(plan.count(PlacementKind::EnemyWall), 4);

        // grass:4x1 is 168 wide; its walls sit just outside both edges.
        let walls: Vec<_> = plan.of_kind(PlacementKind::EnemyWall).skip(2).collect();
        let space = LevelSpace::new(config.level_size);
        let wall = config.sizes.enemy_wall;

        assert_eq!(walls[0].center.x, space.to_world(Vec2::new(420.0 - wall.width / 2.0, 0.0)).x);
        assert_eq!(walls[1].center.x, space.to_world(Vec2::new(588.0 + wall.width / 2.0, 0.0)).x);
        // Both rest on the platform's top edge.
        let top = space.to_world(Vec2::new(0.0, 420.0)).y;
        assert_eq!(walls[0].center.y - wall.height / 2.0, top);
    }

    #[test]
    fn planning_is_deterministic() {
        let config = GameConfig::default();

        assert_eq!(
            plan_level(&description(), &config).unwrap(),
            plan_level(&description(), &config).unwrap()
        );
    }

    #[test]
    fn counts_match_description() {
        let plan = plan_level(&description(), &GameConfig::default()).unwrap();

        assert_eq!(plan.count(PlacementKind::Coin), 2);
        assert_eq!(plan.count(PlacementKind::Enemy), 1);
        assert_eq!(plan.count(PlacementKind::Key), 1);
        assert_eq!(plan.count(PlacementKind::Door), 1);
        assert_eq!(plan.count(PlacementKind::Bounds), 2);
        assert!(plan.hero().is_some());
    }

    #[test]
    fn unknown_platform_image_rejects_whole_level() {
        let mut level = description();
        level.platforms.push(PlatformRecord { image: "lava".into(), x: 0.0, y: 0.0 });

        match plan_level(&level, &GameConfig::default()) {
            Err(LevelLoadError::UnknownPlatformImage { index, image }) => {
                assert_eq!(index, 2);
                assert_eq!(image, "lava");
            }
            other => panic!("expected unknown image, got {:?}", other),
        }
    }

    #[test]
    fn door_stands_on_its_point() {
        let config = GameConfig::default();
        let plan = plan_level(&description(), &config).unwrap();
        let door = plan.of_kind(PlacementKind::Door).next().unwrap();
        let floor = LevelSpace::new(config.level_size).to_world(Vec2::new(169.0, 546.0));

        assert_eq!(door.center.x, floor.x);
        assert_eq!(door.center.y - config.sizes.door.height / 2.0, floor.y);
    }
}
