//! Creatures domain: reactions to stun and rescue messages.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{LevelWon, Session};
use crate::creatures::{Boar, BoarStunned, Piglet, PigletRescued};

const STUNNED_TINT: Color = Color::srgb(0.55, 0.55, 0.7);

pub(crate) fn tint_stunned_boars(
    mut events: MessageReader<BoarStunned>,
    mut boars: Query<&mut Sprite, With<Boar>>,
) {
    for event in events.read() {
        if let Ok(mut sprite) = boars.get_mut(event.boar) {
            sprite.color = STUNNED_TINT;
        }
        info!("Boar {:?} stunned", event.boar);
    }
}

/// Despawn rescued piglets and flag the session as won once none remain.
pub(crate) fn handle_rescues(
    mut commands: Commands,
    mut events: MessageReader<PigletRescued>,
    piglets: Query<&Piglet>,
    mut session: ResMut<Session>,
    mut won_events: MessageWriter<LevelWon>,
) {
    let mut rescued_any = false;
    for event in events.read() {
        session.piglets_rescued += 1;
        rescued_any = true;
        commands.entity(event.piglet).despawn();
        info!(
            "Piglet {:?} rescued ({} so far)",
            event.piglet, session.piglets_rescued
        );
    }

    if !rescued_any || session.won {
        return;
    }

    let remaining = piglets.iter().filter(|piglet| !piglet.rescued).count();
    if remaining == 0 {
        session.won = true;
        won_events.write(LevelWon {
            piglets_rescued: session.piglets_rescued,
        });
        info!(
            "All piglets rescued! {} in total",
            session.piglets_rescued
        );
    }
}
