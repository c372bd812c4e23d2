//! UI domain: pause overlay and toggle.

use bevy::prelude::*;

use crate::core::InputPaused;
use crate::player::InputBindings;

/// Marker for the pause overlay
#[derive(Component)]
pub struct PauseUI;

/// Spawn the pause overlay hidden.
pub fn spawn_pause_overlay(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            PauseUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(50),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        })
        .id()
}

/// Toggle pause on the pause key while the overlay is attached.
pub(crate) fn toggle_pause(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut paused: ResMut<InputPaused>,
    overlay_query: Query<(), With<PauseUI>>,
) {
    if overlay_query.is_empty() || !keys.any_just_pressed(bindings.pause.iter().copied()) {
        return;
    }

    let now_paused = paused.toggle();
    info!("Input {}", if now_paused { "paused" } else { "resumed" });
}

/// Show the overlay exactly while input is paused.
pub(crate) fn sync_pause_overlay(
    paused: Res<InputPaused>,
    mut overlay_query: Query<&mut Visibility, With<PauseUI>>,
) {
    let target = if paused.is_paused() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in &mut overlay_query {
        visibility.set_if_neq(target);
    }
}
