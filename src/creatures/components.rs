//! Creatures domain: boar, piglet and ball components.

use bevy::prelude::*;

/// The only enemy kind. Hitbox 0 deals damage, hitbox 1 is the weak point on its head.
#[derive(Component, Debug, Default)]
pub struct Boar {
    pub stunned: bool,
}

/// A piglet waiting to be rescued.
#[derive(Component, Debug, Default)]
pub struct Piglet {
    pub rescued: bool,
}

/// Collectible ball. Passes through the player for now.
#[derive(Component, Debug, Default)]
pub struct Ball;

/// Screen-space hitboxes relative to the entity's top-left corner.
/// Index 0 is the main body.
#[derive(Component, Debug, Clone)]
pub struct Hitboxes {
    /// Size of the entity box the hitboxes are laid out in.
    pub size: Vec2,
    pub shapes: Vec<Rect>,
}

impl Hitboxes {
    /// A single hitbox covering the whole entity.
    pub fn single(size: Vec2) -> Self {
        Self {
            size,
            shapes: vec![Rect::from_corners(Vec2::ZERO, size)],
        }
    }

    /// Damage hitbox over the body below the head, plus a weak point that
    /// sticks out `weak_point_depth` above the entity box and reaches as far
    /// into it.
    pub fn with_weak_point(size: Vec2, weak_point_depth: f32) -> Self {
        Self {
            size,
            shapes: vec![
                Rect::from_corners(Vec2::new(0.0, weak_point_depth), size),
                Rect::from_corners(
                    Vec2::new(0.0, -weak_point_depth),
                    Vec2::new(size.x, weak_point_depth),
                ),
            ],
        }
    }
}

pub const BOAR_SIZE: Vec2 = Vec2::new(32.0, 24.0);
pub const BOAR_WEAK_POINT_DEPTH: f32 = 6.0;
pub const PIGLET_SIZE: Vec2 = Vec2::new(16.0, 16.0);
pub const BALL_SIZE: Vec2 = Vec2::new(16.0, 16.0);
