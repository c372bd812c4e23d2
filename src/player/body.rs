//! Player domain: screen-space body integrated once per tick.
//!
//! avian2d resolves terrain and moves the transform; this body owns the
//! velocity the controller reasons about (pixels per reference frame, y down)
//! and the falling/jumping flags.

use bevy::prelude::*;

use crate::player::components::world_velocity;
use crate::player::resources::PlayerTuning;
use crate::player::services::{PhysicsBody, Step};

#[derive(Component, Debug, Clone)]
pub struct PlayerBody {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_velocity: Vec2,
    pub gravity: f32,
    /// Set by `detect_ground` before each tick.
    pub on_ground: bool,
    /// Set by `detect_ceiling` before each tick.
    pub on_ceiling: bool,
    pub falling: bool,
    pub jumping: bool,
    pub shapes: Vec<Rect>,
}

impl PlayerBody {
    pub fn new(tuning: &PlayerTuning, position: Vec2) -> Self {
        let size = tuning.body_size();
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            acceleration: tuning.acceleration(),
            max_velocity: tuning.max_velocity(),
            gravity: tuning.gravity,
            on_ground: false,
            on_ceiling: false,
            falling: false,
            jumping: false,
            shapes: vec![Rect::from_corners(Vec2::ZERO, size)],
        }
    }

    /// Shapes translated to screen space.
    pub fn world_shapes(&self) -> impl Iterator<Item = Rect> + '_ {
        let offset = self.position;
        self.shapes
            .iter()
            .map(move |shape| Rect::from_corners(shape.min + offset, shape.max + offset))
    }

    /// Velocity handed to the physics engine, in world pixels per second.
    /// Impulses added after `integrate` stay on the body but move it no
    /// faster than `max_velocity`.
    pub fn physics_velocity(&self) -> Vec2 {
        world_velocity(self.velocity.clamp(-self.max_velocity, self.max_velocity))
    }

    /// Move out of a solid contact and stop along the pushed axes.
    pub fn separate(&mut self, overlap_v: Vec2) {
        if overlap_v == Vec2::ZERO {
            return;
        }

        self.position -= overlap_v;
        if overlap_v.x != 0.0 {
            self.velocity.x = 0.0;
        }
        if overlap_v.y != 0.0 {
            self.velocity.y = 0.0;
            if overlap_v.y > 0.0 {
                // Pushed up onto something.
                self.falling = false;
                self.jumping = false;
            }
        }
    }
}

impl PhysicsBody for PlayerBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    fn max_velocity(&self) -> Vec2 {
        self.max_velocity
    }

    fn is_falling(&self) -> bool {
        self.falling
    }

    fn is_jumping(&self) -> bool {
        self.jumping
    }

    fn set_jumping(&mut self, jumping: bool) {
        self.jumping = jumping;
    }

    fn shapes(&self) -> &[Rect] {
        &self.shapes
    }

    fn add_shape(&mut self, shape: Rect) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    fn remove_shape_at(&mut self, index: usize) {
        if index < self.shapes.len() {
            self.shapes.remove(index);
        }
    }

    fn integrate(&mut self, step: Step) -> bool {
        self.velocity.y += self.gravity * step.tick;
        if self.on_ground && self.velocity.y >= 0.0 {
            self.velocity.y = 0.0;
        }
        // Head against a ceiling: the rise stops, gravity takes over next tick.
        if self.on_ceiling && self.velocity.y < 0.0 {
            self.velocity.y = 0.0;
        }

        self.velocity = self
            .velocity
            .clamp(-self.max_velocity, self.max_velocity);

        self.falling = self.velocity.y > 0.0;
        if self.falling {
            self.jumping = false;
        }

        self.velocity != Vec2::ZERO
    }
}
