use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use orrery::system::{HEIGHT, WIDTH};

fn main() {
    let window = Window {
        title: game::game::WINDOW_TITLE.into(),
        resolution: (WIDTH, HEIGHT).into(),
        resizable: false,
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(Shape2dPlugin::default())
        .add_plugins(game::game::GamePlugin {})
        .run();
}
