//! Player domain: marker components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::services::REFERENCE_FPS;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character. Creatures have no colliders; their hitboxes are
    /// checked by the player's own narrow phase.
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for level geometry. Contacts with it end hit-stun.
#[derive(Component, Debug)]
pub struct Terrain;

/// Convert a Bevy transform (center, y up) to the screen-space top-left
/// corner of a box of `size` (y down).
pub fn screen_top_left(transform: &Transform, size: Vec2) -> Vec2 {
    Vec2::new(
        transform.translation.x - size.x * 0.5,
        -transform.translation.y - size.y * 0.5,
    )
}

/// Inverse of [`screen_top_left`]: world-space center of a screen-space box.
pub fn world_center(top_left: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(top_left.x + size.x * 0.5, -(top_left.y + size.y * 0.5))
}

/// Screen-space velocity in pixels per reference frame to world-space
/// pixels per second.
pub fn world_velocity(screen_velocity: Vec2) -> Vec2 {
    Vec2::new(screen_velocity.x, -screen_velocity.y) * REFERENCE_FPS
}
