//! Player domain: the platformer controller and its Bevy adapters.
//!
//! `PlayerController` is engine-agnostic and talks to its host through the
//! traits in `services`. The systems here feed it keyboard input, the
//! screen-space body, the sprite animator and a creature contact scan.

mod body;
mod collision;
mod components;
mod contacts;
mod controller;
mod input;
mod resources;
mod services;
mod systems;

#[cfg(test)]
mod tests;

pub use body::PlayerBody;
pub use collision::{CollisionResponse, Contacted, Enemy, Party, Rescuable};
pub use components::{GameLayer, Player, Terrain, screen_top_left, world_center, world_velocity};
pub use contacts::{
    BoarContact, ContactScan, PigletContact, ScanTarget, TargetState, overlap_vector,
};
pub use controller::{KICK_SHAPE_INDEX, PlayerController};
pub use resources::{InputBindings, PlayerTuning};
pub use services::{
    Action, AnimationCompletion, AnimationPlayer, AnimationTick, CollisionSystem, InputQuery,
    PhysicsBody, PlayerServices, REFERENCE_FPS, REFERENCE_FRAME_MS, Step,
};
pub(crate) use systems::{drive_player, spawn_player};

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::systems::{detect_ceiling, detect_ground};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputBindings>().add_systems(
            FixedUpdate,
            (detect_ground, detect_ceiling, drive_player)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
