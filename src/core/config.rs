//! Gameplay configuration loaded from an external RON file.
//!
//! Every field falls back to its default when missing, so a config file only
//! needs to name the values it changes.

use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

/// Where the gameplay config is read from at startup.
pub const CONFIG_PATH: &str = "assets/data/config/gameplay.ron";

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn half_extents(self) -> Vec2 {
        self.as_vec2() / 2.0
    }
}

/// Hero motion tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeroTuning {
    /// Horizontal speed in px/s
    pub speed: f32,
    /// Upward speed applied by a successful jump
    pub jump_speed: f32,
    /// Upward speed applied by a stomp recoil
    pub bounce_speed: f32,
    pub size: Size,
    /// Length of the play-once death clip
    pub death_secs: f32,
}

impl Default for HeroTuning {
    fn default() -> Self {
        Self {
            speed: 200.0,
            jump_speed: 600.0,
            bounce_speed: 200.0,
            size: Size::new(36.0, 42.0),
            death_secs: 0.5,
        }
    }
}

/// Enemy motion tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub speed: f32,
    pub size: Size,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: 100.0,
            size: Size::new(42.0, 32.0),
        }
    }
}

/// Pixel sizes of the non-actor sprites.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EntitySizes {
    pub coin: Size,
    pub key: Size,
    pub door: Size,
    pub enemy_wall: Size,
    pub decoration: Size,
}

impl Default for EntitySizes {
    fn default() -> Self {
        Self {
            coin: Size::new(22.0, 22.0),
            key: Size::new(30.0, 30.0),
            door: Size::new(42.0, 66.0),
            enemy_wall: Size::new(5.0, 32.0),
            decoration: Size::new(42.0, 42.0),
        }
    }
}

/// Gameplay configuration loaded from assets/data/config/gameplay.ron.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub hero: HeroTuning,
    pub enemy: EnemyTuning,
    /// Downward acceleration in px/s²
    pub gravity: f32,
    /// A held jump key only counts as a fresh attempt below this hold time
    pub jump_hold_threshold_ms: u64,
    /// Duration of the walk into an open door
    pub door_entry_secs: f32,
    /// Duration of each screen fade
    pub fade_secs: f32,
    /// Size of the level in the persisted screen space
    pub level_size: Size,
    pub sizes: EntitySizes,
    /// Platform image name -> sprite size
    pub platforms: HashMap<String, Size>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let platforms = [
            ("ground", Size::new(960.0, 42.0)),
            ("grass:8x1", Size::new(336.0, 42.0)),
            ("grass:6x1", Size::new(252.0, 42.0)),
            ("grass:4x1", Size::new(168.0, 42.0)),
            ("grass:2x1", Size::new(84.0, 42.0)),
            ("grass:1x1", Size::new(42.0, 42.0)),
        ]
        .into_iter()
        .map(|(name, size)| (name.to_string(), size))
        .collect();

        Self {
            hero: HeroTuning::default(),
            enemy: EnemyTuning::default(),
            gravity: 1200.0,
            jump_hold_threshold_ms: 200,
            door_entry_secs: 0.5,
            fade_secs: 0.5,
            level_size: Size::new(960.0, 600.0),
            sizes: EntitySizes::default(),
            platforms,
        }
    }
}

impl GameConfig {
    /// Load gameplay config from the RON file, falling back to defaults.
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(config) => {
                    info!("Loaded gameplay config from {}", CONFIG_PATH);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", CONFIG_PATH, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", CONFIG_PATH, e);
                Self::default()
            }
        }
    }

    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    pub fn jump_hold_threshold(&self) -> Duration {
        Duration::from_millis(self.jump_hold_threshold_ms)
    }

    pub fn platform_size(&self, image: &str) -> Option<Size> {
        self.platforms.get(image).copied()
    }
}

/// System to load gameplay config at startup.
pub fn load_game_config(mut commands: Commands) {
    commands.insert_resource(GameConfig::load());
}
