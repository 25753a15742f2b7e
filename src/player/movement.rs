//! Hero input handling, state updates, spawning, and death.

use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::collision::{physics_groups, Category, CollisionTable};
use crate::core::{
    ActorDestroyed, ActorKind, AnimationCompleted, Clip, GameConfig, PlayOnce, SessionEntity,
    SoundCue, SpriteAnimation,
};
use crate::rendering::SpriteAssets;

/// Draw order of the hero sprite.
pub const HERO_Z: f32 = 5.0;

/// Keys bound to hero motion.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            up: KeyCode::ArrowUp,
        }
    }
}

/// How long the jump key has been held continuously.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct JumpHold {
    held: Duration,
}

impl JumpHold {
    /// Restart the clock on a fresh press, reset it on release.
    pub fn update(&mut self, pressed: bool, just_pressed: bool, delta: Duration) {
        self.held = if pressed && !just_pressed {
            self.held + delta
        } else {
            Duration::ZERO
        };
    }

    pub fn held(&self) -> Duration {
        self.held
    }
}

/// What the player asked the hero to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionIntent {
    pub direction: i8,
    pub jump: bool,
}

impl MotionIntent {
    /// Left wins over right. A jump only counts while the key is freshly held,
    /// so holding it down does not auto-repeat jumps.
    pub fn read(left: bool, right: bool, up: bool, up_held: Duration, threshold: Duration) -> Self {
        let direction = if left {
            -1
        } else if right {
            1
        } else {
            0
        };

        Self {
            direction,
            jump: up && up_held < threshold,
        }
    }
}

/// Bind input afresh for every session.
pub fn bind_input(mut commands: Commands) {
    commands.insert_resource(InputBindings::default());
    commands.insert_resource(JumpHold::default());
}

/// Update the jump key hold clock.
pub fn track_jump_hold(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    time: Res<Time>,
    mut hold: ResMut<JumpHold>,
) {
    hold.update(
        keyboard.pressed(bindings.up),
        keyboard.just_pressed(bindings.up),
        time.delta(),
    );
}

/// Turn keyboard state into hero motion.
pub fn drive_hero(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    hold: Res<JumpHold>,
    config: Res<GameConfig>,
    mut heroes: Query<(&mut Hero, &mut Velocity, &Grounded)>,
    mut cues: EventWriter<SoundCue>,
) {
    let intent = MotionIntent::read(
        keyboard.pressed(bindings.left),
        keyboard.pressed(bindings.right),
        keyboard.pressed(bindings.up),
        hold.held(),
        config.jump_hold_threshold(),
    );

    for (mut hero, mut velocity, grounded) in heroes.iter_mut() {
        if !hero.is_active() {
            continue;
        }

        hero.move_toward(&mut velocity, intent.direction, config.hero.speed);

        if intent.jump && hero.jump(&mut velocity, grounded.0, config.hero.jump_speed) {
            cues.send(SoundCue::Jump);
        }
    }
}

/// Re-derive hero states after physics and request the matching clip.
pub fn update_hero_states(
    mut heroes: Query<(&mut Hero, &Velocity, &Grounded, &mut SpriteAnimation)>,
) {
    for (mut hero, velocity, grounded, mut animation) in heroes.iter_mut() {
        let state = hero.refresh_state(velocity.linvel, grounded.0);
        animation.request(state.clip());
    }
}

/// Kill the hero: no more physics, play the death clip once.
pub fn kill_hero(world: &mut World, hero: Entity) {
    let death_secs = world.resource::<GameConfig>().hero.death_secs;
    let Ok(mut entity) = world.get_entity_mut(hero) else {
        return;
    };

    if let Some(mut hero) = entity.get_mut::<Hero>() {
        hero.die();
    }
    entity.insert((
        RigidBodyDisabled,
        ColliderDisabled,
        PlayOnce::new(Clip::HeroDie, death_secs),
    ));
}

/// Remove the hero once its death clip has played.
pub fn despawn_dead_heroes(
    mut commands: Commands,
    mut completed: EventReader<AnimationCompleted>,
    heroes: Query<&Hero>,
    mut destroyed: EventWriter<ActorDestroyed>,
) {
    for event in completed.read() {
        if event.clip != Clip::HeroDie {
            continue;
        }
        if heroes.get(event.entity).is_ok_and(|hero| !hero.alive) {
            commands.entity(event.entity).despawn_recursive();
            destroyed.send(ActorDestroyed {
                entity: event.entity,
                kind: ActorKind::Hero,
            });
            info!("Hero destroyed");
        }
    }
}

/// Spawn the hero at a world position.
pub fn spawn_hero(
    commands: &mut Commands,
    position: Vec2,
    sprites: &SpriteAssets,
    config: &GameConfig,
    table: &CollisionTable,
) -> Entity {
    let half = config.hero.size.half_extents();

    commands
        .spawn((
            Hero::default(),
            Grounded::default(),
            Category::Player,
            SessionEntity,
            SpriteAnimation::new(Clip::HeroStop),
            Sprite::from_atlas_image(
                sprites.hero.clone(),
                TextureAtlas {
                    layout: sprites.hero_layout.clone(),
                    index: 0,
                },
            ),
            Transform::from_translation(position.extend(HERO_Z)),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::cuboid(half.x, half.y),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            Friction::coefficient(0.0),
            physics_groups(table, Category::Player),
        ))
        .id()
}
