mod content;
mod core;
mod creatures;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod player;
mod screens;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Piglet Rescue".to_string(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        sprites::SpritesPlugin,
        player::PlayerPlugin,
        creatures::CreaturesPlugin,
        level::LevelPlugin,
        ui::UiPlugin,
        screens::ScreensPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
