//! Core domain: boot flow and camera systems.

use bevy::prelude::*;

use crate::core::state::GameState;
use crate::player::Player;

pub(crate) fn transition_to_playing(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Viewport follows the player on both axes.
pub(crate) fn follow_player(
    player: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(target) = player.single() else {
        return;
    };

    for mut camera in &mut cameras {
        camera.translation.x = target.translation.x;
        camera.translation.y = target.translation.y;
    }
}
