//! Player domain: keyboard sampling behind the input query.

use bevy::prelude::*;

use crate::player::resources::InputBindings;
use crate::player::services::{Action, InputQuery};

/// Keyboard state for one tick.
pub(crate) struct KeyboardInput<'a> {
    keys: &'a ButtonInput<KeyCode>,
    bindings: &'a InputBindings,
    paused: bool,
}

impl<'a> KeyboardInput<'a> {
    pub(crate) fn new(
        keys: &'a ButtonInput<KeyCode>,
        bindings: &'a InputBindings,
        paused: bool,
    ) -> Self {
        Self {
            keys,
            bindings,
            paused,
        }
    }
}

impl InputQuery for KeyboardInput<'_> {
    fn is_held(&self, action: Action) -> bool {
        !self.paused
            && self
                .keys
                .any_pressed(self.bindings.keys(action).iter().copied())
    }
}
