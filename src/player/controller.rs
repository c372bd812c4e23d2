//! Player domain: per-tick motion, kick and animation state machine.

use bevy::prelude::*;

use crate::player::resources::PlayerTuning;
use crate::player::services::{
    Action, AnimationCompletion, AnimationPlayer, InputQuery, PhysicsBody, PlayerServices, Step,
};
use crate::sprites::PlayerAnimation;

/// Body shape index of the kick hitbox while a kick is active.
pub const KICK_SHAPE_INDEX: usize = 1;

/// Decision state of the player character.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    /// Last pressed horizontal facing, `(1, 0)` or `(-1, 0)`.
    pub direction: Vec2,
    /// Milliseconds since the body was last grounded.
    pub airborne_ms: f32,
    /// Hit-stun: directional input is ignored until a terrain contact.
    pub knockbacked: bool,
    /// A kick is running and the kick hitbox is attached.
    pub kicking: bool,
    pub(crate) tuning: PlayerTuning,
}

impl PlayerController {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            direction: Vec2::X,
            airborne_ms: tuning.initial_airborne_ms,
            knockbacked: false,
            kicking: false,
            tuning: tuning.clone(),
        }
    }

    /// Run one simulation tick. Returns whether the player moved or its
    /// renderable changed.
    pub fn update(&mut self, step: Step, services: PlayerServices<'_>) -> bool {
        let PlayerServices {
            input,
            body,
            animation,
            collisions,
        } = services;

        if !self.knockbacked {
            self.apply_movement_intent(step, input, body, animation);
        }

        self.admit_jump(step, input, body);

        self.airborne_ms += step.delta_ms;
        if !body.is_falling() && !body.is_jumping() {
            self.airborne_ms = 0.0;
        }

        body.integrate(step);

        let position = body.position();
        let shapes = body.shapes().to_vec();
        collisions.check(position, &shapes, &mut |response, other| {
            self.on_collision(response, other, &mut *body, &mut *animation)
        });

        if input.is_held(Action::Kick) && !self.knockbacked {
            self.kick(body);
        }

        self.select_animation(body, animation);

        let tick = animation.advance(step);
        if let Some(completion) = tick.completed {
            self.complete_animation(completion, body);
        }

        let velocity = body.velocity();
        tick.changed || velocity.x != 0.0 || velocity.y != 0.0
    }

    fn apply_movement_intent(
        &mut self,
        step: Step,
        input: &dyn InputQuery,
        body: &mut dyn PhysicsBody,
        animation: &mut dyn AnimationPlayer,
    ) {
        let mut velocity = body.velocity();
        let accel = body.acceleration().x * step.tick;

        if input.is_held(Action::Left) {
            self.flip_x(animation, true);
            velocity.x -= accel;
            self.direction = Vec2::NEG_X;
        } else if input.is_held(Action::Right) {
            self.flip_x(animation, false);
            velocity.x += accel;
            self.direction = Vec2::X;
        } else {
            velocity.x = 0.0;
        }

        body.set_velocity(velocity);
    }

    fn admit_jump(&mut self, step: Step, input: &dyn InputQuery, body: &mut dyn PhysicsBody) {
        if !input.is_held(Action::Jump) || body.is_jumping() || self.knockbacked {
            return;
        }

        let grounded = !body.is_falling();
        if grounded || self.airborne_ms < self.tuning.max_airborne_jump_ms {
            let mut velocity = body.velocity();
            velocity.y = -body.max_velocity().y * step.tick;
            body.set_velocity(velocity);
            body.set_jumping(true);
            debug!(
                "Jump admitted: grounded={}, airborne_ms={}",
                grounded, self.airborne_ms
            );
        }
    }

    /// Sprite flipping is frozen while kicking so the hitbox stays on the drawn side.
    fn flip_x(&self, animation: &mut dyn AnimationPlayer, flip: bool) {
        if !self.kicking {
            animation.flip_x(flip);
        }
    }

    /// Start a kick unless one is already running.
    pub fn kick(&mut self, body: &mut dyn PhysicsBody) {
        if self.kicking {
            return;
        }

        self.kicking = true;
        let index = body.add_shape(self.tuning.kick_shape(self.direction.x));
        debug!("Kick started: facing={}, shape={}", self.direction.x, index);
    }

    /// Animation the player should show for the current state.
    pub fn animation_for(&self, body: &dyn PhysicsBody) -> PlayerAnimation {
        if self.kicking {
            PlayerAnimation::Kick
        } else if self.knockbacked {
            PlayerAnimation::Stun
        } else if body.is_jumping() {
            PlayerAnimation::Jump
        } else if body.is_falling() {
            PlayerAnimation::Fall
        } else if body.velocity().x != 0.0 {
            PlayerAnimation::Walk
        } else {
            PlayerAnimation::Idle
        }
    }

    fn select_animation(&self, body: &dyn PhysicsBody, animation: &mut dyn AnimationPlayer) {
        let next = self.animation_for(body);
        if animation.is_current(next) {
            return;
        }

        let on_complete = (next == PlayerAnimation::Kick).then_some(AnimationCompletion::EndKick);
        animation.set_current(next, on_complete);
    }

    /// Dispatch a continuation returned by the animation player.
    pub fn complete_animation(
        &mut self,
        completion: AnimationCompletion,
        body: &mut dyn PhysicsBody,
    ) {
        match completion {
            AnimationCompletion::EndKick => {
                if self.kicking {
                    self.kicking = false;
                    body.remove_shape_at(KICK_SHAPE_INDEX);
                    debug!("Kick finished");
                }
            }
        }
    }
}
