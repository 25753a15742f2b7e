//! In-game HUD - key indicator and coin counter.

use bevy::prelude::*;

use crate::core::{LevelSession, SessionEntity};
use crate::rendering::SpriteAssets;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the key icon; frame 1 once the key is held.
#[derive(Component)]
pub struct KeyIcon;

/// Marker for the coin count label.
#[derive(Component)]
pub struct CoinLabel;

/// Text shown next to the coin icon.
pub fn coin_label(coins: u32) -> String {
    format!("X{}", coins)
}

/// Spawn the HUD for a freshly loaded session.
pub fn spawn_hud(mut commands: Commands, sprites: Res<SpriteAssets>) {
    // HUD root container (top-left corner)
    commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            HudRoot,
            SessionEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                ImageNode::from_atlas_image(
                    sprites.icon_key.clone(),
                    TextureAtlas {
                        layout: sprites.icon_key_layout.clone(),
                        index: 0,
                    },
                ),
                KeyIcon,
            ));

            parent.spawn(ImageNode::new(sprites.icon_coin.clone()));

            parent.spawn((
                Text::new(coin_label(0)),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                CoinLabel,
            ));
        });
}

/// Mirror the session counters into the HUD.
pub fn refresh_hud(
    session: Option<Res<LevelSession>>,
    mut labels: Query<&mut Text, With<CoinLabel>>,
    mut icons: Query<&mut ImageNode, With<KeyIcon>>,
) {
    let Some(session) = session else {
        return;
    };
    if !session.is_changed() {
        return;
    }

    for mut text in labels.iter_mut() {
        text.0 = coin_label(session.coins);
    }
    for mut icon in icons.iter_mut() {
        if let Some(atlas) = icon.texture_atlas.as_mut() {
            atlas.index = usize::from(session.has_key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hud_app() -> App {
        let mut app = App::new();
        app.init_resource::<SpriteAssets>()
            .insert_resource(LevelSession::new(0))
            .add_systems(Startup, spawn_hud)
            .add_systems(Update, refresh_hud);
        app.update();
        app
    }

    fn label(app: &mut App) -> String {
        let mut query = app.world_mut().query_filtered::<&Text, With<CoinLabel>>();
        query.single(app.world()).0.clone()
    }

    #[test]
    fn label_counts_collected_coins() {
        let mut app = hud_app();
        assert_eq!(label(&mut app), "X0");

        for _ in 0..3 {
            app.world_mut().resource_mut::<LevelSession>().collect_coin();
        }
        app.update();

        assert_eq!(label(&mut app), "X3");
    }

    #[test]
    fn key_icon_switches_frame() {
        let mut app = hud_app();
        app.world_mut().resource_mut::<LevelSession>().collect_key();
        app.update();

        let mut query = app.world_mut().query_filtered::<&ImageNode, With<KeyIcon>>();
        let icon = query.single(app.world());
        assert_eq!(icon.texture_atlas.as_ref().map(|a| a.index), Some(1));
    }
}
