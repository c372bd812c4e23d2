//! Core domain: game state definitions for the screen flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loading.
    #[default]
    Boot,
    /// The play screen: a level is loaded and the player is live.
    Playing,
}
