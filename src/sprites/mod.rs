//! Sprites module for sheet-based animation.
//!
//! This module handles:
//! - Loading the sprite sheet manifest from JSON
//! - The player animation table and playback

pub mod animation;
pub mod manifest;


use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sync_animated_sprites);
    }
}
