//! Level description format and the level registry.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;

use super::error::LevelLoadError;

/// Directory scanned for level files at startup.
pub const LEVELS_DIR: &str = "assets/data/levels";

/// A position in level screen space (pixels, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A platform placement; `image` selects the sprite and its size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformRecord {
    pub image: String,
    pub x: f32,
    pub y: f32,
}

/// A decorative sprite placement.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DecorationRecord {
    pub frame: usize,
    pub x: f32,
    pub y: f32,
}

/// Everything placed in one level, as persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDescription {
    pub hero: Point,
    pub door: Point,
    /// Levels without a key have a door that never opens.
    #[serde(default)]
    pub key: Option<Point>,
    pub platforms: Vec<PlatformRecord>,
    #[serde(default)]
    pub decoration: Vec<DecorationRecord>,
    #[serde(default)]
    pub coins: Vec<Point>,
    #[serde(default, alias = "spiders")]
    pub enemies: Vec<Point>,
}

impl LevelDescription {
    /// Parse a description; `origin` names the source in errors.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, LevelLoadError> {
        ron::from_str(contents).map_err(|e| LevelLoadError::Parse {
            path: origin.to_string(),
            details: e.to_string(),
        })
    }

    /// Read and parse a level file.
    pub fn load(path: &Path) -> Result<Self, LevelLoadError> {
        let contents = fs::read_to_string(path).map_err(|e| LevelLoadError::Read {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(&contents, &path.display().to_string())
    }
}

/// Ordered level files. The level index is a position in this list.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelRegistry {
    levels: Vec<PathBuf>,
}

impl LevelRegistry {
    pub fn new(levels: Vec<PathBuf>) -> Self {
        Self { levels }
    }

    /// Collect every `.ron` file of a directory, sorted by file name.
    pub fn discover(dir: &Path) -> Result<Self, LevelLoadError> {
        let entries = fs::read_dir(dir).map_err(|e| LevelLoadError::Read {
            path: dir.display().to_string(),
            details: e.to_string(),
        })?;

        let mut levels: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "ron"))
            .collect();
        levels.sort();

        if levels.is_empty() {
            return Err(LevelLoadError::NoLevels {
                dir: dir.display().to_string(),
            });
        }

        Ok(Self { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn path(&self, index: usize) -> Result<&Path, LevelLoadError> {
        self.levels
            .get(index)
            .map(PathBuf::as_path)
            .ok_or(LevelLoadError::IndexOutOfRange {
                index,
                count: self.levels.len(),
            })
    }

    /// Read and parse the level at an index.
    pub fn load(&self, index: usize) -> Result<LevelDescription, LevelLoadError> {
        LevelDescription::load(self.path(index)?)
    }
}

/// Discover level files at startup.
///
/// A registry inserted before startup is kept as is.
pub fn discover_levels(mut commands: Commands, current: Res<LevelRegistry>) {
    if !current.is_empty() {
        info!("Using {} preset level(s)", current.len());
        return;
    }

    let registry = match LevelRegistry::discover(Path::new(LEVELS_DIR)) {
        Ok(registry) => {
            info!("Discovered {} level(s) in {}", registry.len(), LEVELS_DIR);
            registry
        }
        Err(e) => {
            error!("Level discovery failed: {}", e);
            LevelRegistry::default()
        }
    };
    commands.insert_resource(registry);
}
