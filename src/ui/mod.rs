//! UI domain: HUD, pause overlay and screen fade.

mod fade;
mod hud;
mod pause;

#[cfg(test)]
mod tests;

pub use fade::ScreenFade;
pub use hud::{HudUI, spawn_hud};
pub use pause::{PauseUI, spawn_pause_overlay};

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::fade::{animate_fade, spawn_fade_overlay};
use crate::ui::hud::{show_win_banner, update_hud};
use crate::ui::pause::{sync_pause_overlay, toggle_pause};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFade>()
            .add_systems(Startup, spawn_fade_overlay)
            .add_systems(Update, animate_fade)
            .add_systems(
                Update,
                (
                    (update_hud, show_win_banner).chain(),
                    (toggle_pause, sync_pause_overlay).chain(),
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
