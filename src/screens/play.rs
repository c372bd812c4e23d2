//! Screens domain: what the play screen does on entry and exit.

use bevy::prelude::*;
use std::time::Duration;

use crate::core::Session;

/// Level loaded when the play screen is entered.
pub const PLAY_LEVEL: &str = "area01";
pub const FADE_COLOR: Color = Color::srgb(215.0 / 255.0, 232.0 / 255.0, 148.0 / 255.0);
pub const FADE_DURATION: Duration = Duration::from_millis(350);

/// UI layers the play screen attaches to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Hud,
    Pause,
}

/// Host services the play screen drives.
pub trait ScreenServices {
    /// Fire-and-forget: failures are reported by the loader.
    fn load_level(&mut self, name: &str);
    fn attach(&mut self, overlay: Overlay);
    fn detach(&mut self, overlay: Overlay);
    fn set_input_paused(&mut self, paused: bool);
    fn begin_fade(&mut self, color: Color, duration: Duration);
}

#[derive(Resource, Debug, Default)]
pub struct PlayScreen {
    attached: Vec<Overlay>,
}

impl PlayScreen {
    pub fn on_enter(&mut self, session: &mut Session, services: &mut dyn ScreenServices) {
        info!("Entering play screen");
        services.load_level(PLAY_LEVEL);

        for overlay in [Overlay::Hud, Overlay::Pause] {
            if !self.attached.contains(&overlay) {
                services.attach(overlay);
                self.attached.push(overlay);
            }
        }

        session.reset();
        services.set_input_paused(false);
        services.begin_fade(FADE_COLOR, FADE_DURATION);
    }

    pub fn on_exit(&mut self, services: &mut dyn ScreenServices) {
        info!("Leaving play screen");
        for overlay in self.attached.drain(..) {
            services.detach(overlay);
        }
    }

    pub fn attached(&self) -> &[Overlay] {
        &self.attached
    }
}
