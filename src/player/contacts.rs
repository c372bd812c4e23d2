//! Player domain: narrow phase between the player's shapes and creature hitboxes.
//!
//! Creatures are snapshotted before the tick; the policy mutates the
//! snapshots and `drive_player` writes the outcome back to the world.

use bevy::prelude::*;

use crate::player::collision::{CollisionResponse, Contacted, Enemy, Rescuable};
use crate::player::services::CollisionSystem;

/// Minimum translation vector for two overlapping boxes: subtracting it
/// from `a` separates them. `None` when they only touch or are apart.
pub fn overlap_vector(a: Rect, b: Rect) -> Option<Vec2> {
    let overlap_x = a.max.x.min(b.max.x) - a.min.x.max(b.min.x);
    let overlap_y = a.max.y.min(b.max.y) - a.min.y.max(b.min.y);
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }

    let a_center = a.center();
    let b_center = b.center();
    if overlap_x < overlap_y {
        let sign = if a_center.x < b_center.x { 1.0 } else { -1.0 };
        Some(Vec2::new(overlap_x * sign, 0.0))
    } else {
        let sign = if a_center.y < b_center.y { 1.0 } else { -1.0 };
        Some(Vec2::new(0.0, overlap_y * sign))
    }
}

/// Snapshot of a boar for one tick.
#[derive(Debug, Clone)]
pub struct BoarContact {
    pub position: Vec2,
    pub stunned: bool,
}

impl Enemy for BoarContact {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn top(&self) -> f32 {
        self.position.y
    }

    fn is_stunned(&self) -> bool {
        self.stunned
    }

    fn stun(&mut self) {
        self.stunned = true;
    }

    fn weak_point_claims_contact(&self) -> bool {
        // Hitboxes carry no collision filter of their own, so the weak point
        // never filters in ahead of the damage hitbox.
        false
    }
}

#[derive(Debug, Clone, Default)]
pub struct PigletContact {
    pub rescued: bool,
}

impl Rescuable for PigletContact {
    fn rescue(&mut self) {
        self.rescued = true;
    }
}

#[derive(Debug, Clone)]
pub enum TargetState {
    Ball,
    Piglet(PigletContact),
    Boar(BoarContact),
    Other,
}

/// A creature with its hitboxes in screen space.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    pub entity: Entity,
    pub position: Vec2,
    pub shapes: Vec<Rect>,
    pub state: TargetState,
}

/// Collision system for one tick of the player.
#[derive(Debug, Default)]
pub struct ContactScan {
    pub targets: Vec<ScanTarget>,
    /// Terrain entities the player started touching since the last tick.
    pub terrain_contacts: Vec<Entity>,
    /// Total push accumulated from solid creature contacts.
    pub separation: Vec2,
}

impl ContactScan {
    pub fn new(terrain_contacts: Vec<Entity>) -> Self {
        Self {
            terrain_contacts,
            ..default()
        }
    }

    pub fn push(&mut self, target: ScanTarget) {
        self.targets.push(target);
    }
}

impl CollisionSystem for ContactScan {
    fn check(
        &mut self,
        player_position: Vec2,
        player_shapes: &[Rect],
        on_collision: &mut dyn FnMut(&CollisionResponse, Contacted<'_>) -> bool,
    ) {
        for target in &mut self.targets {
            for (player_index, player_shape) in player_shapes.iter().enumerate() {
                let player_rect = Rect::from_corners(
                    player_shape.min + player_position,
                    player_shape.max + player_position,
                );

                for (other_index, other_shape) in target.shapes.iter().enumerate() {
                    let other_rect = Rect::from_corners(
                        other_shape.min + target.position,
                        other_shape.max + target.position,
                    );
                    let Some(overlap_v) = overlap_vector(player_rect, other_rect) else {
                        continue;
                    };

                    let response =
                        CollisionResponse::player_first(player_index, other_index, overlap_v);
                    let contacted = match &mut target.state {
                        TargetState::Ball => Contacted::Ball,
                        TargetState::Piglet(piglet) => Contacted::Piglet(piglet),
                        TargetState::Boar(boar) => Contacted::Boar(boar),
                        TargetState::Other => Contacted::Unhandled,
                    };

                    if on_collision(&response, contacted) {
                        self.separation += overlap_v;
                    }
                }
            }
        }

        // avian2d already resolved terrain; only the policy side effects remain.
        for _ in &self.terrain_contacts {
            let response = CollisionResponse::player_first(0, 0, Vec2::ZERO);
            on_collision(&response, Contacted::Unhandled);
        }
    }
}
