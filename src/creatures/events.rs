//! Creatures domain: messages emitted by player contacts.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A boar was stunned by a head bounce.
#[derive(Debug)]
pub struct BoarStunned {
    pub boar: Entity,
}

impl Message for BoarStunned {}

/// A piglet was rescued by touching it.
#[derive(Debug)]
pub struct PigletRescued {
    pub piglet: Entity,
}

impl Message for PigletRescued {}
