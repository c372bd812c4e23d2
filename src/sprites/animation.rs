//! Animation table and playback for the player sprite sheet.
//!
//! `SpriteAnimator` is the animation player the controller drives. Frame
//! timing, flicker and completion continuations are all accumulated from
//! the tick's elapsed milliseconds. A completion stays attached to its
//! animation until the next `set_current` and fires at the end of each cycle.

use bevy::prelude::*;

use crate::player::{AnimationCompletion, AnimationPlayer, AnimationTick, Step};

/// Animations of the player sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerAnimation {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
    Fall,
    Kick,
    Stun,
    Win,
}

impl PlayerAnimation {
    pub const ALL: [PlayerAnimation; 8] = [
        PlayerAnimation::Idle,
        PlayerAnimation::Walk,
        PlayerAnimation::Run,
        PlayerAnimation::Jump,
        PlayerAnimation::Fall,
        PlayerAnimation::Kick,
        PlayerAnimation::Stun,
        PlayerAnimation::Win,
    ];

    /// Sheet frame indices, in playback order.
    pub fn frames(self) -> &'static [usize] {
        match self {
            PlayerAnimation::Idle => &[0, 1, 2],
            PlayerAnimation::Walk => &[3, 4, 5, 6, 7, 8],
            PlayerAnimation::Run => &[9, 10, 11, 12, 13, 14],
            PlayerAnimation::Jump => &[15, 16],
            PlayerAnimation::Fall => &[18, 19],
            PlayerAnimation::Kick => &[20, 21, 21, 21],
            PlayerAnimation::Stun => &[23, 24, 23, 24, 23, 24],
            PlayerAnimation::Win => &[25, 26, 27, 26],
        }
    }

    pub fn frame_duration_ms(self) -> f32 {
        match self {
            PlayerAnimation::Idle => 150.0,
            PlayerAnimation::Walk => 100.0,
            PlayerAnimation::Run => 70.0,
            PlayerAnimation::Jump
            | PlayerAnimation::Fall
            | PlayerAnimation::Kick
            | PlayerAnimation::Stun => 50.0,
            PlayerAnimation::Win => 120.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerAnimation::Idle => "idle",
            PlayerAnimation::Walk => "walk",
            PlayerAnimation::Run => "run",
            PlayerAnimation::Jump => "jump",
            PlayerAnimation::Fall => "fall",
            PlayerAnimation::Kick => "kick",
            PlayerAnimation::Stun => "stun",
            PlayerAnimation::Win => "win",
        }
    }
}

/// Animation playback on the player's sprite.
#[derive(Component, Debug, Clone, Default)]
pub struct SpriteAnimator {
    current: PlayerAnimation,
    frame: usize,
    frame_timer_ms: f32,
    on_complete: Option<AnimationCompletion>,
    flicker_remaining_ms: f32,
    hidden: bool,
    flipped: bool,
}

impl SpriteAnimator {
    pub fn current(&self) -> PlayerAnimation {
        self.current
    }

    /// Index into the sprite sheet for the frame on screen.
    pub fn atlas_index(&self) -> usize {
        self.current.frames()[self.frame]
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }
}

impl AnimationPlayer for SpriteAnimator {
    fn is_current(&self, animation: PlayerAnimation) -> bool {
        self.current == animation
    }

    fn set_current(
        &mut self,
        animation: PlayerAnimation,
        on_complete: Option<AnimationCompletion>,
    ) {
        self.current = animation;
        self.frame = 0;
        self.frame_timer_ms = 0.0;
        self.on_complete = on_complete;
    }

    fn advance(&mut self, step: Step) -> AnimationTick {
        let mut tick = AnimationTick::default();

        if self.flicker_remaining_ms > 0.0 {
            self.flicker_remaining_ms = (self.flicker_remaining_ms - step.delta_ms).max(0.0);
            // Blink every tick, always ending visible.
            self.hidden = self.flicker_remaining_ms > 0.0 && !self.hidden;
            tick.changed = true;
        }

        let duration = self.current.frame_duration_ms();
        let frame_count = self.current.frames().len();
        self.frame_timer_ms += step.delta_ms;

        while self.frame_timer_ms >= duration {
            self.frame_timer_ms -= duration;
            self.frame += 1;
            tick.changed = true;

            if self.frame >= frame_count {
                self.frame = 0;
                // Stays registered, so a looping animation reports every cycle.
                if let Some(completion) = self.on_complete {
                    tick.completed = Some(completion);
                    break;
                }
            }
        }

        tick
    }

    fn flicker(&mut self, duration_ms: f32) {
        self.flicker_remaining_ms = duration_ms;
    }

    fn is_flickering(&self) -> bool {
        self.flicker_remaining_ms > 0.0
    }

    fn flip_x(&mut self, flip: bool) {
        self.flipped = flip;
    }
}

/// Push animator state to the sprite. Runs only when the controller
/// reported a visual change.
pub fn sync_animated_sprites(
    animators: Query<(&SpriteAnimator, &Children), Changed<SpriteAnimator>>,
    mut sprites: Query<(&mut Sprite, &mut Visibility)>,
) {
    for (animator, children) in &animators {
        let mut iter = sprites.iter_many_mut(children);
        while let Some((mut sprite, mut visibility)) = iter.fetch_next() {
            sprite.flip_x = animator.is_flipped();
            if let Some(atlas) = sprite.texture_atlas.as_mut() {
                atlas.index = animator.atlas_index();
            }
            *visibility = if animator.is_visible() {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}
