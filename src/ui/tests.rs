//! UI domain: tests for fade timing and HUD labels.

use std::time::Duration;

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::ScreenFade;
use super::hud::{WinBanner, piglet_label, show_win_banner, win_banner_label};
use crate::core::LevelWon;

#[test]
fn test_fade_starts_opaque_and_ends_transparent() {
    let mut fade = ScreenFade::default();
    fade.begin(Color::srgb_u8(215, 232, 148), Duration::from_millis(350));

    assert!(fade.is_active());
    assert_eq!(fade.alpha(), 1.0);

    fade.tick(175.0);
    assert!((fade.alpha() - 0.5).abs() < 1e-4);

    fade.tick(1000.0);
    assert!(!fade.is_active());
    assert_eq!(fade.alpha(), 0.0);
}

#[test]
fn test_idle_fade_is_transparent() {
    let fade = ScreenFade::default();

    assert!(!fade.is_active());
    assert_eq!(fade.alpha(), 0.0);
}

#[test]
fn test_begin_restarts_running_fade() {
    let mut fade = ScreenFade::default();
    fade.begin(Color::BLACK, Duration::from_millis(100));
    fade.tick(80.0);

    fade.begin(Color::WHITE, Duration::from_millis(200));

    assert_eq!(fade.elapsed_ms, 0.0);
    assert_eq!(fade.color, Color::WHITE);
    assert_eq!(fade.alpha(), 1.0);
}

#[test]
fn test_piglet_label_counts_total() {
    assert_eq!(piglet_label(0, 3), "Piglets: 0/3");
    assert_eq!(piglet_label(2, 1), "Piglets: 2/3");
}

#[test]
fn test_win_banner_names_rescued_count() {
    assert_eq!(win_banner_label(3), "All 3 piglets rescued!");
    assert_eq!(win_banner_label(1), "The piglet is safe!");
}

#[test]
fn test_level_won_reveals_banner() {
    let mut world = World::new();
    world.init_resource::<Messages<LevelWon>>();
    let banner = world
        .spawn((WinBanner, Text::new(""), Visibility::Hidden))
        .id();

    world.run_system_once(show_win_banner).unwrap();
    assert_eq!(world.get::<Visibility>(banner), Some(&Visibility::Hidden));

    world.write_message(LevelWon { piglets_rescued: 3 });
    world.run_system_once(show_win_banner).unwrap();

    assert_eq!(world.get::<Visibility>(banner), Some(&Visibility::Inherited));
    assert_eq!(world.get::<Text>(banner).unwrap().0, "All 3 piglets rescued!");
}
