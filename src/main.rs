use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use snake_game::game::{BACKGROUND_COLOR, FoodEaten, GameConfig, GameSet, Ticker};
use snake_game::rendering::RenderingPlugin;
use snake_game::session::SessionPlugin;
use snake_game::snake::SnakePlugin;
use snake_game::ui::UiPlugin;

fn main() {
    let config = GameConfig::default();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(
                        config.width() as u32,
                        config.height() as u32,
                    ),
                    title: "Snake Game".to_string(),
                    resizable: false,
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(config)
        .init_resource::<Ticker>()
        .add_message::<FoodEaten>()
        .configure_sets(
            Update,
            (GameSet::Input, GameSet::Simulation, GameSet::Render).chain(),
        )
        .add_plugins((SessionPlugin, SnakePlugin, RenderingPlugin, UiPlugin))
        .run();
}
