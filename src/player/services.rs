//! Player domain: capability traits the controller drives each tick.
//!
//! The controller never talks to Bevy directly. The host supplies these
//! services; `systems.rs` implements them over ECS components and tests
//! implement them with plain fakes.

use bevy::math::{Rect, Vec2};

use crate::player::collision::{CollisionResponse, Contacted};
use crate::sprites::PlayerAnimation;

/// Elapsed time of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Milliseconds since the previous tick, used by timers.
    pub delta_ms: f32,
    /// Frame-normalised scale (1.0 at 60 Hz), used by velocity changes.
    pub tick: f32,
}

/// Simulation rate the velocity units are expressed against.
pub const REFERENCE_FPS: f32 = 60.0;
/// Duration of one reference frame in milliseconds.
pub const REFERENCE_FRAME_MS: f32 = 1000.0 / REFERENCE_FPS;

impl Step {
    pub fn new(delta_ms: f32, tick: f32) -> Self {
        Self { delta_ms, tick }
    }

    /// Build a step from wall-clock seconds.
    pub fn from_secs(secs: f32) -> Self {
        let delta_ms = secs * 1000.0;
        Self {
            delta_ms,
            tick: delta_ms / REFERENCE_FRAME_MS,
        }
    }
}

/// Named actions the controller polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Jump,
    Kick,
}

pub trait InputQuery {
    /// Whether the action is currently held.
    fn is_held(&self, action: Action) -> bool;
}

/// Physics body of the player, in screen space (y grows downward).
pub trait PhysicsBody {
    /// Top-left corner of the body.
    fn position(&self) -> Vec2;
    fn size(&self) -> Vec2;

    fn bottom(&self) -> f32 {
        self.position().y + self.size().y
    }

    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn acceleration(&self) -> Vec2;
    fn max_velocity(&self) -> Vec2;

    fn is_falling(&self) -> bool;
    fn is_jumping(&self) -> bool;
    fn set_jumping(&mut self, jumping: bool);

    /// Collision shapes relative to `position`. Index 0 is the main body.
    fn shapes(&self) -> &[Rect];
    /// Append an auxiliary shape, returning its index.
    fn add_shape(&mut self, shape: Rect) -> usize;
    fn remove_shape_at(&mut self, index: usize);

    /// Apply gravity and velocity limits and refresh the falling/jumping
    /// flags. Returns whether the body moved.
    fn integrate(&mut self, step: Step) -> bool;
}

/// Continuation handed to the animation player, returned to the
/// controller when the animation cycle completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCompletion {
    EndKick,
}

/// Result of advancing the animation player by one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationTick {
    /// The rendered frame or flicker visibility changed.
    pub changed: bool,
    /// A registered completion whose cycle finished during this advance.
    pub completed: Option<AnimationCompletion>,
}

pub trait AnimationPlayer {
    fn is_current(&self, animation: PlayerAnimation) -> bool;
    /// Switch animation. Callers guard with `is_current` to keep this idempotent.
    fn set_current(
        &mut self,
        animation: PlayerAnimation,
        on_complete: Option<AnimationCompletion>,
    );
    fn advance(&mut self, step: Step) -> AnimationTick;
    /// Start a time-boxed flicker, replacing any running one.
    fn flicker(&mut self, duration_ms: f32);
    fn is_flickering(&self) -> bool;
    fn flip_x(&mut self, flip: bool);
}

/// Narrow phase for the player's shapes against every other entity.
pub trait CollisionSystem {
    /// Call `on_collision` once per overlapping shape pair. The returned
    /// boolean decides whether the pair is resolved as solid.
    fn check(
        &mut self,
        player_position: Vec2,
        player_shapes: &[Rect],
        on_collision: &mut dyn FnMut(&CollisionResponse, Contacted<'_>) -> bool,
    );
}

/// Everything `PlayerController::update` needs from its host.
pub struct PlayerServices<'a> {
    pub input: &'a dyn InputQuery,
    pub body: &'a mut dyn PhysicsBody,
    pub animation: &'a mut dyn AnimationPlayer,
    pub collisions: &'a mut dyn CollisionSystem,
}
