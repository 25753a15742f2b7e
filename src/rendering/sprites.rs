//! Sprite sheet handles shared by every spawner.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::core::GameConfig;

/// Image and atlas handles for everything the game draws.
///
/// Spawners only clone handles out of this resource, so they work unchanged
/// with the default (empty) handles when no asset server is present.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteAssets {
    pub background: Handle<Image>,
    pub hero: Handle<Image>,
    pub hero_layout: Handle<TextureAtlasLayout>,
    pub enemy: Handle<Image>,
    pub enemy_layout: Handle<TextureAtlasLayout>,
    pub coin: Handle<Image>,
    pub coin_layout: Handle<TextureAtlasLayout>,
    pub key: Handle<Image>,
    pub door: Handle<Image>,
    pub door_layout: Handle<TextureAtlasLayout>,
    pub decoration: Handle<Image>,
    pub decoration_layout: Handle<TextureAtlasLayout>,
    pub platforms: HashMap<String, Handle<Image>>,
    pub icon_key: Handle<Image>,
    pub icon_key_layout: Handle<TextureAtlasLayout>,
    pub icon_coin: Handle<Image>,
}

/// Cell size and frame count of one horizontal sprite strip.
struct Strip {
    cell: UVec2,
    frames: u32,
}

impl Strip {
    fn new(cell: Vec2, frames: u32) -> Self {
        Self {
            cell: cell.as_uvec2(),
            frames,
        }
    }

    fn layout(&self) -> TextureAtlasLayout {
        TextureAtlasLayout::from_grid(self.cell, self.frames, 1, None, None)
    }
}

const HERO_FRAMES: u32 = 7;
const ENEMY_FRAMES: u32 = 3;
const COIN_FRAMES: u32 = 4;
const DOOR_FRAMES: u32 = 2;
const DECORATION_FRAMES: u32 = 6;
const ICON_KEY_SIZE: Vec2 = Vec2::new(34.0, 30.0);

/// Load every image and build the atlas layouts.
pub fn load_sprite_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    config: Res<GameConfig>,
) {
    let sizes = &config.sizes;
    let mut layout = |strip: Strip| layouts.add(strip.layout());

    let platforms = config
        .platforms
        .keys()
        .map(|name| {
            let file = format!("images/{}.png", name.replace(':', "_"));
            (name.clone(), asset_server.load(file))
        })
        .collect();

    let sprites = SpriteAssets {
        background: asset_server.load("images/background.png"),
        hero: asset_server.load("images/hero.png"),
        hero_layout: layout(Strip::new(config.hero.size.as_vec2(), HERO_FRAMES)),
        enemy: asset_server.load("images/spider.png"),
        enemy_layout: layout(Strip::new(config.enemy.size.as_vec2(), ENEMY_FRAMES)),
        coin: asset_server.load("images/coin_animated.png"),
        coin_layout: layout(Strip::new(sizes.coin.as_vec2(), COIN_FRAMES)),
        key: asset_server.load("images/key.png"),
        door: asset_server.load("images/door.png"),
        door_layout: layout(Strip::new(sizes.door.as_vec2(), DOOR_FRAMES)),
        decoration: asset_server.load("images/decor.png"),
        decoration_layout: layout(Strip::new(sizes.decoration.as_vec2(), DECORATION_FRAMES)),
        platforms,
        icon_key: asset_server.load("images/key_icon.png"),
        icon_key_layout: layout(Strip::new(ICON_KEY_SIZE, 2)),
        icon_coin: asset_server.load("images/coin_icon.png"),
    };

    info!("Loaded sprite assets ({} platform images)", sprites.platforms.len());
    commands.insert_resource(sprites);
}
