//! Rendering plugin - turns the current frame into shapes and plays the food pulse effect.

mod surface;

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    FOOD_COLOR, FoodEaten, GameConfig, GameSet, PULSE_COLOR, Position, PulseEffect, SNAKE_COLOR,
    TileShape, Z_EFFECT, Z_FOOD, Z_SNAKE,
};

pub use surface::{DrawSurface, Frame, Overlay, TileKind};

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Frame>()
            .add_systems(Startup, setup_arena)
            .add_systems(
                Update,
                (
                    paint_tiles.run_if(resource_changed::<Frame>),
                    spawn_food_eaten_effect,
                    pulse_effect_system,
                )
                    .chain()
                    .in_set(GameSet::Render),
            );
    }
}

/// World-space center of the tile at `position`.
///
/// Grid pixels start at the top-left corner with `y` pointing down; the
/// camera is centered on the arena with `y` pointing up.
pub fn tile_center(config: &GameConfig, position: Position) -> Vec2 {
    let half_tile = config.tile_size as f32 / 2.0;
    Vec2::new(
        position.x as f32 - config.width() as f32 / 2.0 + half_tile,
        config.height() as f32 / 2.0 - position.y as f32 - half_tile,
    )
}

/// Startup system spawning the camera.
fn setup_arena(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// System to clear all tile shapes and draw the current frame.
fn paint_tiles(
    mut commands: Commands,
    frame: Res<Frame>,
    config: Res<GameConfig>,
    shapes: Query<Entity, With<TileShape>>,
) {
    for entity in shapes.iter() {
        commands.entity(entity).despawn();
    }

    let size = config.tile_size as f32;
    for &(position, kind) in frame.tiles() {
        let (color, z) = match kind {
            TileKind::Food => (FOOD_COLOR, Z_FOOD),
            TileKind::Head | TileKind::Body => (SNAKE_COLOR, Z_SNAKE),
        };

        commands.spawn((
            ShapeBundle::rect(
                &ShapeConfig {
                    color,
                    transform: Transform::from_translation(
                        tile_center(&config, position).extend(z),
                    ),
                    ..ShapeConfig::default_2d()
                },
                Vec2::splat(size),
            ),
            TileShape,
        ));
    }
}

/// System to spawn visual effect when food is eaten.
fn spawn_food_eaten_effect(
    mut commands: Commands,
    mut food_eaten_reader: MessageReader<FoodEaten>,
    config: Res<GameConfig>,
) {
    for event in food_eaten_reader.read() {
        commands.spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: PULSE_COLOR,
                    alpha_mode: ShapeAlphaMode::Add,
                    transform: Transform::from_translation(
                        tile_center(&config, event.position).extend(Z_EFFECT),
                    ),
                    ..ShapeConfig::default_2d()
                },
                config.tile_size as f32 / 2.0,
            ),
            PulseEffect {
                timer: Timer::from_seconds(0.3, TimerMode::Once),
                start_scale: 1.0,
                end_scale: 2.5,
            },
        ));
    }
}

/// System to handle pulse effects (for eaten food flash).
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            transform.scale = Vec3::splat(scale);
        }
    }
}
