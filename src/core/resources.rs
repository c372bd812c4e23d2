//! Core domain: session state shared by the play screen, HUD and creatures.

use bevy::prelude::*;

/// Input pause flag. While set, the player sees no action as held.
#[derive(Resource, Debug, Default)]
pub struct InputPaused {
    pub paused: bool,
}

impl InputPaused {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

/// State owned by the play screen for the current level.
#[derive(Resource, Debug, Default)]
pub struct Session {
    /// Every piglet of the level has been rescued.
    pub won: bool,
    pub piglets_rescued: u32,
}

impl Session {
    /// Reset for a fresh level.
    pub fn reset(&mut self) {
        self.won = false;
        self.piglets_rescued = 0;
    }
}
