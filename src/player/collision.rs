//! Player domain: collision-response policy per contacted entity kind.

use bevy::prelude::*;

use crate::player::controller::PlayerController;
use crate::player::services::{AnimationPlayer, PhysicsBody};

/// Which party of a response is the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Player,
    Other,
}

/// One overlapping shape pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResponse {
    /// Party that owns `index_shape_a`.
    pub a: Party,
    pub index_shape_a: usize,
    pub index_shape_b: usize,
    /// Penetration vector. Subtracting it from `a`'s position separates the pair.
    pub overlap_v: Vec2,
}

impl CollisionResponse {
    pub fn player_first(player_shape: usize, other_shape: usize, overlap_v: Vec2) -> Self {
        Self {
            a: Party::Player,
            index_shape_a: player_shape,
            index_shape_b: other_shape,
            overlap_v,
        }
    }

    pub fn player_shape(&self) -> usize {
        match self.a {
            Party::Player => self.index_shape_a,
            Party::Other => self.index_shape_b,
        }
    }

    pub fn other_shape(&self) -> usize {
        match self.a {
            Party::Player => self.index_shape_b,
            Party::Other => self.index_shape_a,
        }
    }

    /// Overlap from the player's point of view; zero unless the player is `a`.
    pub fn relative_overlap(&self) -> Vec2 {
        let scale = if self.a == Party::Player { 1.0 } else { 0.0 };
        self.overlap_v * scale
    }
}

/// Enemy capabilities the policy needs.
pub trait Enemy {
    /// Top-left corner, screen space.
    fn position(&self) -> Vec2;
    fn top(&self) -> f32;
    fn is_stunned(&self) -> bool;
    fn stun(&mut self);
    /// Whether the weak-point hitbox takes this contact before the damage hitbox.
    fn weak_point_claims_contact(&self) -> bool;
}

pub trait Rescuable {
    fn rescue(&mut self);
}

/// The other party of a contact.
pub enum Contacted<'a> {
    Ball,
    Piglet(&'a mut dyn Rescuable),
    Boar(&'a mut dyn Enemy),
    /// Terrain and every kind the player has no rule for.
    Unhandled,
}

impl PlayerController {
    /// Decide how one shape pair resolves. `true` means solid.
    pub fn on_collision(
        &mut self,
        response: &CollisionResponse,
        other: Contacted<'_>,
        body: &mut dyn PhysicsBody,
        animation: &mut dyn AnimationPlayer,
    ) -> bool {
        // The kick hitbox deals damage, it never blocks.
        if response.player_shape() > 0 {
            return false;
        }

        match other {
            // TODO: resolve as solid when landing on top of the ball.
            Contacted::Ball => false,
            Contacted::Piglet(piglet) => {
                piglet.rescue();
                false
            }
            Contacted::Boar(boar) => self.collide_with_boar(response, boar, body, animation),
            Contacted::Unhandled => {
                self.knockbacked = false;
                true
            }
        }
    }

    fn collide_with_boar(
        &mut self,
        response: &CollisionResponse,
        boar: &mut dyn Enemy,
        body: &mut dyn PhysicsBody,
        animation: &mut dyn AnimationPlayer,
    ) -> bool {
        if response.player_shape() != 0 {
            return true;
        }

        if response.other_shape() == 0 {
            if !animation.is_flickering() && !boar.is_stunned() && !boar.weak_point_claims_contact()
            {
                body.set_velocity(Vec2::ZERO);
                self.hit(animation);
                let away = if boar.position().x - body.position().x > 0.0 {
                    1.0
                } else {
                    -1.0
                };
                let strength = self.tuning.hit_knockback_strength;
                self.knockback(body, Some(strength), Some(Vec2::new(away, 0.0)));
                debug!("Player hit by boar, knockback direction {}", away);
            }
            return !animation.is_flickering();
        }

        let relative = response.relative_overlap();
        if relative.y > 0.0 && body.bottom() - relative.y < boar.top() {
            if !boar.is_stunned() {
                let speed = self.tuning.head_bounce_speed;
                // Sign of the scaled product, so the horizontal push is one pixel
                // per frame pointing away from the boar.
                let nudge = if -speed * 10.0 * (boar.position().x - body.position().x) > 0.0 {
                    1.0
                } else {
                    -1.0
                };
                body.set_velocity(Vec2::new(nudge, -speed));
                debug!("Head bounce on boar");
            }
            boar.stun();
        }
        !boar.is_stunned()
    }

    /// Push the player away and suppress directional control until the
    /// next terrain contact.
    pub fn knockback(
        &mut self,
        body: &mut dyn PhysicsBody,
        strength: Option<f32>,
        direction: Option<Vec2>,
    ) {
        self.knockbacked = true;

        let strength = strength.unwrap_or(self.tuning.default_knockback_strength);
        let direction = direction.unwrap_or(self.direction);
        let impulse = Vec2::new(-strength * 10.0 * direction.x, -strength);
        body.set_velocity(body.velocity() + impulse);
    }

    /// Start the invincibility flicker.
    pub fn hit(&self, animation: &mut dyn AnimationPlayer) {
        animation.flicker(self.tuning.hit_flicker_ms);
    }
}
