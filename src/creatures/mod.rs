//! Creatures domain: boars, piglets and balls the player interacts with.

mod components;
mod events;
mod systems;

pub use components::{
    BALL_SIZE, BOAR_SIZE, BOAR_WEAK_POINT_DEPTH, Ball, Boar, Hitboxes, PIGLET_SIZE, Piglet,
};
pub use events::{BoarStunned, PigletRescued};

use bevy::prelude::*;

use crate::core::GameState;
use crate::creatures::systems::{handle_rescues, tint_stunned_boars};
use crate::player::drive_player;

pub struct CreaturesPlugin;

impl Plugin for CreaturesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BoarStunned>()
            .add_message::<PigletRescued>()
            .add_systems(
                FixedUpdate,
                (tint_stunned_boars, handle_rescues)
                    .after(drive_player)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
