//! Debug domain: hitbox overlay for tuning collisions.
//!
//! Only compiled with the `dev-tools` feature. F1 toggles drawing of the
//! player's body and kick shapes and every creature hitbox.

mod systems;

use bevy::prelude::*;

use crate::debug::systems::{draw_hitboxes, toggle_hitboxes};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_hitboxes: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_hitboxes,
                draw_hitboxes.run_if(|state: Res<DebugState>| state.show_hitboxes),
            )
                .chain(),
        );
    }
}
