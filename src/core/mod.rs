//! Core domain: game states, session resources and camera.

mod events;
mod resources;
mod state;
mod systems;


pub use events::LevelWon;
pub use resources::{InputPaused, Session};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera, transition_to_playing};
use crate::content::load_content;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<InputPaused>()
            .init_resource::<Session>()
            .add_message::<LevelWon>()
            .add_systems(Startup, (setup_camera, transition_to_playing.after(load_content)))
            .add_systems(
                PostUpdate,
                follow_player.run_if(in_state(GameState::Playing)),
            );
    }
}
