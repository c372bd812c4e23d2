//! Level domain: turning level files into terrain, creatures and the player.

mod spawn;

pub use spawn::{LevelEntity, LoadLevel};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::spawn::{despawn_level, load_requested_levels};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LoadLevel>()
            .add_systems(Update, load_requested_levels)
            .add_systems(OnExit(GameState::Playing), despawn_level);
    }
}
