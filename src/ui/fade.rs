//! UI domain: full-screen color fade used by screen transitions.

use bevy::prelude::*;
use std::time::Duration;

/// Fade from a solid color to transparent.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScreenFade {
    pub color: Color,
    pub duration_ms: f32,
    pub elapsed_ms: f32,
}

impl ScreenFade {
    /// Start a fade, replacing any running one.
    pub fn begin(&mut self, color: Color, duration: Duration) {
        self.color = color;
        self.duration_ms = duration.as_secs_f32() * 1000.0;
        self.elapsed_ms = 0.0;
        debug!("Fade started over {}ms", self.duration_ms);
    }

    pub fn tick(&mut self, delta_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
    }

    pub fn is_active(&self) -> bool {
        self.elapsed_ms < self.duration_ms
    }

    /// Overlay opacity, 1 at the start and 0 once finished.
    pub fn alpha(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 0.0;
        }
        1.0 - self.elapsed_ms / self.duration_ms
    }
}

/// Marker for the fade overlay node
#[derive(Component)]
pub struct FadeOverlay;

pub(crate) fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        FadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::NONE),
        // Above everything, including the pause overlay
        ZIndex(100),
    ));
}

pub(crate) fn animate_fade(
    time: Res<Time>,
    mut fade: ResMut<ScreenFade>,
    mut overlay_query: Query<&mut BackgroundColor, With<FadeOverlay>>,
) {
    if !fade.is_active() {
        // Make sure the last frame lands on fully transparent.
        for mut background in &mut overlay_query {
            if background.0 != Color::NONE {
                background.0 = Color::NONE;
            }
        }
        return;
    }

    fade.tick(time.delta_secs() * 1000.0);
    let color = fade.color.with_alpha(fade.alpha());
    for mut background in &mut overlay_query {
        background.0 = color;
    }
}
