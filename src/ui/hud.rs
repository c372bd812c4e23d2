//! UI domain: piglet counter and victory banner.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{LevelWon, Session};
use crate::creatures::Piglet;

pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the HUD container
#[derive(Component)]
pub struct HudUI;

/// Marker for the rescued-piglet counter text
#[derive(Component)]
pub struct PigletCounterText;

/// Marker for the banner shown once the level is won
#[derive(Component)]
pub struct WinBanner;

pub fn spawn_hud(commands: &mut Commands) -> Entity {
    // Root container positioned at top-left
    commands
        .spawn((
            HudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                PigletCounterText,
                Text::new("Piglets: 0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.9)),
            ));

            parent.spawn((
                WinBanner,
                Text::new(""),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.9, 0.4)),
                Visibility::Hidden,
            ));
        })
        .id()
}

pub(crate) fn update_hud(
    session: Res<Session>,
    piglets: Query<&Piglet>,
    mut counter_query: Query<&mut Text, With<PigletCounterText>>,
    mut banner_query: Query<&mut Visibility, With<WinBanner>>,
) {
    let remaining = piglets.iter().filter(|piglet| !piglet.rescued).count();
    let label = piglet_label(session.piglets_rescued, remaining);

    for mut text in &mut counter_query {
        if text.0 != label {
            text.0 = label.clone();
        }
    }

    // Shown by `show_win_banner`; hidden again when a new session starts.
    if !session.won {
        for mut visibility in &mut banner_query {
            visibility.set_if_neq(Visibility::Hidden);
        }
    }
}

pub(crate) fn show_win_banner(
    mut events: MessageReader<LevelWon>,
    mut banner_query: Query<(&mut Text, &mut Visibility), With<WinBanner>>,
) {
    let Some(won) = events.read().last() else {
        return;
    };

    let label = win_banner_label(won.piglets_rescued);
    for (mut text, mut visibility) in &mut banner_query {
        text.0 = label.clone();
        *visibility = Visibility::Inherited;
    }
}

pub(crate) fn win_banner_label(piglets_rescued: u32) -> String {
    match piglets_rescued {
        1 => "The piglet is safe!".to_string(),
        n => format!("All {} piglets rescued!", n),
    }
}

pub(crate) fn piglet_label(rescued: u32, remaining: usize) -> String {
    format!("Piglets: {}/{}", rescued, rescued as usize + remaining)
}
