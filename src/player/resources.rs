//! Player domain: tuning and input binding resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::player::services::Action;

/// Player movement and combat constants. Loaded from `assets/data/player.ron`;
/// missing fields fall back to these defaults.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub acceleration_x: f32,
    pub acceleration_y: f32,
    pub max_velocity_x: f32,
    pub max_velocity_y: f32,
    /// Added to vertical velocity every reference frame.
    pub gravity: f32,
    pub body_width: f32,
    pub body_height: f32,
    /// Sprite is drawn this far below (negative: above) the collision box.
    pub sprite_offset_y: f32,
    /// Coyote time: jumps are still admitted this long after leaving the ground.
    pub max_airborne_jump_ms: f32,
    /// Airborne time the player spawns with, so a mid-air spawn cannot jump.
    pub initial_airborne_ms: f32,
    pub hit_flicker_ms: f32,
    pub hit_knockback_strength: f32,
    pub default_knockback_strength: f32,
    pub head_bounce_speed: f32,
    pub kick_offset_x: f32,
    pub kick_offset_y: f32,
    pub kick_width: f32,
    pub kick_height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            acceleration_x: 2.0,
            acceleration_y: 9.0,
            max_velocity_x: 2.0,
            max_velocity_y: 9.0,
            gravity: 0.98,
            body_width: 24.0,
            body_height: 24.0,
            sprite_offset_y: -4.0,
            max_airborne_jump_ms: 80.0,
            initial_airborne_ms: 100.0,
            hit_flicker_ms: 500.0,
            hit_knockback_strength: 8.0,
            default_knockback_strength: 2.0,
            head_bounce_speed: 8.0,
            kick_offset_x: 20.0,
            kick_offset_y: 15.0,
            kick_width: 17.0,
            kick_height: 7.0,
        }
    }
}

impl PlayerTuning {
    pub fn acceleration(&self) -> Vec2 {
        Vec2::new(self.acceleration_x, self.acceleration_y)
    }

    pub fn max_velocity(&self) -> Vec2 {
        Vec2::new(self.max_velocity_x, self.max_velocity_y)
    }

    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }

    /// Kick hitbox relative to the body position, in front of the given facing.
    pub fn kick_shape(&self, facing_x: f32) -> Rect {
        let x = if facing_x < 0.0 {
            -self.kick_offset_x
        } else {
            self.kick_offset_x
        };
        Rect::new(
            x,
            self.kick_offset_y,
            x + self.kick_width,
            self.kick_offset_y + self.kick_height,
        )
    }
}

/// Keyboard bindings per action.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
    pub kick: Vec<KeyCode>,
    pub pause: Vec<KeyCode>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::ArrowLeft, KeyCode::KeyA],
            right: vec![KeyCode::ArrowRight, KeyCode::KeyD],
            jump: vec![KeyCode::ArrowUp, KeyCode::KeyW, KeyCode::Space],
            kick: vec![KeyCode::KeyZ, KeyCode::KeyK],
            pause: vec![KeyCode::Escape, KeyCode::KeyP],
        }
    }
}

impl InputBindings {
    pub fn keys(&self, action: Action) -> &[KeyCode] {
        match action {
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Jump => &self.jump,
            Action::Kick => &self.kick,
        }
    }
}
