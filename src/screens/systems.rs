//! Screens domain: Bevy side of the play screen services.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::time::Duration;

use crate::core::{InputPaused, Session};
use crate::level::LoadLevel;
use crate::screens::play::{Overlay, PlayScreen, ScreenServices};
use crate::ui::{ScreenFade, spawn_hud, spawn_pause_overlay};

/// Root node of an attached overlay.
#[derive(Component, Debug)]
pub struct OverlayRoot(pub Overlay);

struct WorldScreenServices<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    /// Attached overlay roots at the time the services were built.
    overlays: Vec<(Entity, Overlay)>,
    level_requests: Vec<LoadLevel>,
    paused: &'a mut InputPaused,
    fade: &'a mut ScreenFade,
}

impl ScreenServices for WorldScreenServices<'_, '_, '_> {
    fn load_level(&mut self, name: &str) {
        self.level_requests.push(LoadLevel {
            name: name.to_string(),
        });
    }

    fn attach(&mut self, overlay: Overlay) {
        let root = match overlay {
            Overlay::Hud => spawn_hud(self.commands),
            Overlay::Pause => spawn_pause_overlay(self.commands),
        };
        self.commands.entity(root).insert(OverlayRoot(overlay));
    }

    fn detach(&mut self, overlay: Overlay) {
        for (entity, _) in self.overlays.iter().filter(|(_, root)| *root == overlay) {
            self.commands.entity(*entity).despawn();
        }
    }

    fn set_input_paused(&mut self, paused: bool) {
        self.paused.set(paused);
    }

    fn begin_fade(&mut self, color: Color, duration: Duration) {
        self.fade.begin(color, duration);
    }
}

pub(crate) fn enter_play_screen(
    mut commands: Commands,
    mut level_requests: MessageWriter<LoadLevel>,
    overlays: Query<(Entity, &OverlayRoot)>,
    mut screen: ResMut<PlayScreen>,
    mut session: ResMut<Session>,
    mut paused: ResMut<InputPaused>,
    mut fade: ResMut<ScreenFade>,
) {
    let mut services = WorldScreenServices {
        commands: &mut commands,
        overlays: overlays.iter().map(|(entity, root)| (entity, root.0)).collect(),
        level_requests: Vec::new(),
        paused: &mut paused,
        fade: &mut fade,
    };
    screen.on_enter(&mut session, &mut services);
    for request in services.level_requests {
        level_requests.write(request);
    }
}

pub(crate) fn exit_play_screen(
    mut commands: Commands,
    overlays: Query<(Entity, &OverlayRoot)>,
    mut screen: ResMut<PlayScreen>,
    mut paused: ResMut<InputPaused>,
    mut fade: ResMut<ScreenFade>,
) {
    let mut services = WorldScreenServices {
        commands: &mut commands,
        overlays: overlays.iter().map(|(entity, root)| (entity, root.0)).collect(),
        level_requests: Vec::new(),
        paused: &mut paused,
        fade: &mut fade,
    };
    screen.on_exit(&mut services);
}
