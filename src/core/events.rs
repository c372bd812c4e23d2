//! Core domain: events for session progress.

use bevy::ecs::message::Message;

/// Event fired when the last piglet of the level is rescued
#[derive(Debug)]
pub struct LevelWon {
    pub piglets_rescued: u32,
}

impl Message for LevelWon {}
