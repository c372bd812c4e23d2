//! Debug domain: hitbox toggle and gizmo drawing.

use bevy::prelude::*;

use crate::creatures::{Boar, Hitboxes};
use crate::debug::DebugState;
use crate::player::{KICK_SHAPE_INDEX, Player, PlayerBody, screen_top_left, world_center};

const BODY_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);
const KICK_COLOR: Color = Color::srgb(0.95, 0.3, 0.2);
const HITBOX_COLOR: Color = Color::srgb(0.3, 0.6, 0.95);
const WEAK_POINT_COLOR: Color = Color::srgb(0.95, 0.85, 0.2);

/// Toggle hitbox drawing with F1
pub(crate) fn toggle_hitboxes(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_hitboxes = !debug_state.show_hitboxes;
        info!("[DEBUG] Hitboxes {}", if debug_state.show_hitboxes { "ON" } else { "OFF" });
    }
}

pub(crate) fn draw_hitboxes(
    mut gizmos: Gizmos,
    players: Query<&PlayerBody, With<Player>>,
    creatures: Query<(&Transform, &Hitboxes, Has<Boar>)>,
) {
    for body in &players {
        for (index, shape) in body.world_shapes().enumerate() {
            let color = if index == KICK_SHAPE_INDEX {
                KICK_COLOR
            } else {
                BODY_COLOR
            };
            draw_screen_rect(&mut gizmos, shape, color);
        }
    }

    for (transform, hitboxes, is_boar) in &creatures {
        let origin = screen_top_left(transform, hitboxes.size);
        for (index, shape) in hitboxes.shapes.iter().enumerate() {
            let color = if is_boar && index > 0 {
                WEAK_POINT_COLOR
            } else {
                HITBOX_COLOR
            };
            let rect = Rect::from_corners(shape.min + origin, shape.max + origin);
            draw_screen_rect(&mut gizmos, rect, color);
        }
    }
}

fn draw_screen_rect(gizmos: &mut Gizmos, rect: Rect, color: Color) {
    let center = world_center(rect.min, rect.size());
    gizmos.rect_2d(Isometry2d::from_translation(center), rect.size(), color);
}
