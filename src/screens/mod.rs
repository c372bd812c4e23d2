//! Screens domain: the play screen lifecycle.

mod play;
mod systems;


pub use play::{FADE_COLOR, FADE_DURATION, Overlay, PLAY_LEVEL, PlayScreen, ScreenServices};
pub use systems::OverlayRoot;

use bevy::prelude::*;

use crate::core::GameState;
use crate::screens::systems::{enter_play_screen, exit_play_screen};

pub struct ScreensPlugin;

impl Plugin for ScreensPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayScreen>()
            .add_systems(OnEnter(GameState::Playing), enter_play_screen)
            .add_systems(OnExit(GameState::Playing), exit_play_screen);
    }
}
