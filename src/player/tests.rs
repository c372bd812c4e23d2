//! Player domain: tests for the controller, collision policy and body.

use bevy::math::{Rect, Vec2};
use bevy::prelude::Entity;

use super::{
    Action, AnimationCompletion, AnimationPlayer, AnimationTick, BoarContact, CollisionResponse,
    CollisionSystem, ContactScan, Contacted, Enemy, InputQuery, KICK_SHAPE_INDEX, Party,
    PhysicsBody, PigletContact, PlayerBody, PlayerController, PlayerServices, PlayerTuning,
    Rescuable, ScanTarget, Step, TargetState, overlap_vector, world_velocity,
};
use crate::sprites::{PlayerAnimation, SpriteAnimator};

// -----------------------------------------------------------------------------
// Fakes
// -----------------------------------------------------------------------------

#[derive(Default)]
struct FakeInput {
    held: Vec<Action>,
}

impl FakeInput {
    fn holding(actions: &[Action]) -> Self {
        Self {
            held: actions.to_vec(),
        }
    }
}

impl InputQuery for FakeInput {
    fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}

/// Body whose integration only reports motion; tests set flags directly.
struct FakeBody {
    position: Vec2,
    size: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    max_velocity: Vec2,
    falling: bool,
    jumping: bool,
    shapes: Vec<Rect>,
}

impl FakeBody {
    fn new(tuning: &PlayerTuning) -> Self {
        let size = tuning.body_size();
        Self {
            position: Vec2::ZERO,
            size,
            velocity: Vec2::ZERO,
            acceleration: tuning.acceleration(),
            max_velocity: tuning.max_velocity(),
            falling: false,
            jumping: false,
            shapes: vec![Rect::from_corners(Vec2::ZERO, size)],
        }
    }
}

impl PhysicsBody for FakeBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    fn max_velocity(&self) -> Vec2 {
        self.max_velocity
    }

    fn is_falling(&self) -> bool {
        self.falling
    }

    fn is_jumping(&self) -> bool {
        self.jumping
    }

    fn set_jumping(&mut self, jumping: bool) {
        self.jumping = jumping;
    }

    fn shapes(&self) -> &[Rect] {
        &self.shapes
    }

    fn add_shape(&mut self, shape: Rect) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    fn remove_shape_at(&mut self, index: usize) {
        self.shapes.remove(index);
    }

    fn integrate(&mut self, _step: Step) -> bool {
        self.velocity != Vec2::ZERO
    }
}

#[derive(Default)]
struct FakeAnimation {
    current: Option<PlayerAnimation>,
    on_complete: Option<AnimationCompletion>,
    set_calls: usize,
    flicker_calls: usize,
    flickering: bool,
    flipped: bool,
    /// Finish the current cycle on the next advance.
    finish_cycle: bool,
}

impl AnimationPlayer for FakeAnimation {
    fn is_current(&self, animation: PlayerAnimation) -> bool {
        self.current == Some(animation)
    }

    fn set_current(
        &mut self,
        animation: PlayerAnimation,
        on_complete: Option<AnimationCompletion>,
    ) {
        self.current = Some(animation);
        self.on_complete = on_complete;
        self.set_calls += 1;
    }

    fn advance(&mut self, _step: Step) -> AnimationTick {
        if !self.finish_cycle {
            return AnimationTick::default();
        }
        self.finish_cycle = false;
        AnimationTick {
            changed: true,
            completed: self.on_complete,
        }
    }

    fn flicker(&mut self, _duration_ms: f32) {
        self.flickering = true;
        self.flicker_calls += 1;
    }

    fn is_flickering(&self) -> bool {
        self.flickering
    }

    fn flip_x(&mut self, flip: bool) {
        self.flipped = flip;
    }
}

#[derive(Default)]
struct FakeBoar {
    position: Vec2,
    stunned: bool,
    stun_calls: usize,
}

impl Enemy for FakeBoar {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn top(&self) -> f32 {
        self.position.y
    }

    fn is_stunned(&self) -> bool {
        self.stunned
    }

    fn stun(&mut self) {
        self.stunned = true;
        self.stun_calls += 1;
    }

    fn weak_point_claims_contact(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct FakePiglet {
    rescues: usize,
}

impl Rescuable for FakePiglet {
    fn rescue(&mut self) {
        self.rescues += 1;
    }
}

enum FakeParty {
    Ball,
    Piglet(FakePiglet),
    Boar(FakeBoar),
    Terrain,
}

/// Replays a fixed list of contacts every check and records the verdicts.
#[derive(Default)]
struct FakeCollisions {
    contacts: Vec<(CollisionResponse, FakeParty)>,
    verdicts: Vec<bool>,
}

impl FakeCollisions {
    fn with(contacts: Vec<(CollisionResponse, FakeParty)>) -> Self {
        Self {
            contacts,
            verdicts: Vec::new(),
        }
    }
}

impl CollisionSystem for FakeCollisions {
    fn check(
        &mut self,
        _player_position: Vec2,
        _player_shapes: &[Rect],
        on_collision: &mut dyn FnMut(&CollisionResponse, Contacted<'_>) -> bool,
    ) {
        for (response, party) in &mut self.contacts {
            let contacted = match party {
                FakeParty::Ball => Contacted::Ball,
                FakeParty::Piglet(piglet) => Contacted::Piglet(piglet),
                FakeParty::Boar(boar) => Contacted::Boar(boar),
                FakeParty::Terrain => Contacted::Unhandled,
            };
            self.verdicts.push(on_collision(response, contacted));
        }
    }
}

struct Rig {
    controller: PlayerController,
    body: FakeBody,
    animation: FakeAnimation,
    collisions: FakeCollisions,
}

impl Rig {
    fn new() -> Self {
        Self::with_tuning(PlayerTuning::default())
    }

    fn with_tuning(tuning: PlayerTuning) -> Self {
        Self {
            controller: PlayerController::new(&tuning),
            body: FakeBody::new(&tuning),
            animation: FakeAnimation::default(),
            collisions: FakeCollisions::default(),
        }
    }

    fn tick(&mut self, step: Step, input: &FakeInput) -> bool {
        self.controller.update(
            step,
            PlayerServices {
                input,
                body: &mut self.body,
                animation: &mut self.animation,
                collisions: &mut self.collisions,
            },
        )
    }

    fn collide(&mut self, response: CollisionResponse, other: Contacted<'_>) -> bool {
        self.controller
            .on_collision(&response, other, &mut self.body, &mut self.animation)
    }
}

/// One tick against the production body and animator, with nothing to collide with.
fn tick_live(
    controller: &mut PlayerController,
    body: &mut PlayerBody,
    animator: &mut SpriteAnimator,
    input: &FakeInput,
) -> bool {
    let mut scan = ContactScan::new(Vec::new());
    controller.update(
        frame(),
        PlayerServices {
            input,
            body,
            animation: animator,
            collisions: &mut scan,
        },
    )
}

fn frame() -> Step {
    Step::new(16.0, 1.0)
}

fn body_contact(other_shape: usize, overlap_v: Vec2) -> CollisionResponse {
    CollisionResponse::player_first(0, other_shape, overlap_v)
}

fn kick_contact(other_shape: usize) -> CollisionResponse {
    CollisionResponse::player_first(KICK_SHAPE_INDEX, other_shape, Vec2::new(2.0, 0.0))
}

// -----------------------------------------------------------------------------
// Movement intent
// -----------------------------------------------------------------------------

#[test]
fn test_left_input_accelerates_and_faces_left() {
    let tuning = PlayerTuning {
        acceleration_x: 5.0,
        ..Default::default()
    };
    let mut rig = Rig::with_tuning(tuning);

    let changed = rig.tick(Step::new(1.0, 1.0), &FakeInput::holding(&[Action::Left]));

    assert!(changed);
    assert_eq!(rig.body.velocity.x, -5.0);
    assert_eq!(rig.controller.direction, Vec2::new(-1.0, 0.0));
    assert!(rig.animation.is_current(PlayerAnimation::Walk));
    assert!(rig.animation.flipped);
}

#[test]
fn test_right_input_scales_with_tick() {
    let mut rig = Rig::new();

    rig.tick(Step::new(32.0, 2.0), &FakeInput::holding(&[Action::Right]));

    assert_eq!(rig.body.velocity.x, 4.0);
    assert_eq!(rig.controller.direction, Vec2::X);
    assert!(!rig.animation.flipped);
}

#[test]
fn test_no_directional_input_stops_immediately() {
    let mut rig = Rig::new();
    rig.body.velocity = Vec2::new(2.0, 0.0);

    let changed = rig.tick(frame(), &FakeInput::default());

    assert!(!changed);
    assert_eq!(rig.body.velocity.x, 0.0);
    assert!(rig.animation.is_current(PlayerAnimation::Idle));
}

#[test]
fn test_knockback_suppresses_directional_input() {
    let mut rig = Rig::new();
    rig.controller
        .knockback(&mut rig.body, Some(8.0), Some(Vec2::X));

    rig.tick(frame(), &FakeInput::holding(&[Action::Right, Action::Left]));

    assert_eq!(rig.body.velocity.x, -80.0);
    assert_eq!(rig.controller.direction, Vec2::X);
    assert!(rig.animation.is_current(PlayerAnimation::Stun));
}

// -----------------------------------------------------------------------------
// Jump admission and airborne time
// -----------------------------------------------------------------------------

#[test]
fn test_jump_admitted_within_coyote_window() {
    let mut rig = Rig::new();
    rig.body.falling = true;
    rig.controller.airborne_ms = 50.0;

    rig.tick(frame(), &FakeInput::holding(&[Action::Jump]));

    assert_eq!(rig.body.velocity.y, -9.0);
    assert!(rig.body.jumping);
    assert!(rig.animation.is_current(PlayerAnimation::Jump));
}

#[test]
fn test_jump_refused_after_coyote_window() {
    let mut rig = Rig::new();
    rig.body.falling = true;
    rig.controller.airborne_ms = 80.0;

    rig.tick(frame(), &FakeInput::holding(&[Action::Jump]));

    assert_eq!(rig.body.velocity.y, 0.0);
    assert!(!rig.body.jumping);
    assert!(rig.animation.is_current(PlayerAnimation::Fall));
}

#[test]
fn test_jump_admitted_when_grounded_regardless_of_airborne_time() {
    let mut rig = Rig::new();
    rig.controller.airborne_ms = 1000.0;

    rig.tick(frame(), &FakeInput::holding(&[Action::Jump]));

    assert!(rig.body.jumping);
}

#[test]
fn test_no_double_jump_while_jumping() {
    let mut rig = Rig::new();
    rig.body.jumping = true;
    rig.body.velocity.y = -3.0;

    rig.tick(frame(), &FakeInput::holding(&[Action::Jump]));

    assert_eq!(rig.body.velocity.y, -3.0);
}

#[test]
fn test_no_jump_while_knockbacked() {
    let mut rig = Rig::new();
    rig.controller.knockbacked = true;

    rig.tick(frame(), &FakeInput::holding(&[Action::Jump]));

    assert!(!rig.body.jumping);
    assert_eq!(rig.body.velocity.y, 0.0);
}

#[test]
fn test_airborne_time_resets_when_grounded() {
    let mut rig = Rig::new();
    rig.controller.airborne_ms = 500.0;

    rig.tick(frame(), &FakeInput::default());

    assert_eq!(rig.controller.airborne_ms, 0.0);
}

#[test]
fn test_airborne_time_accumulates_while_falling() {
    let mut rig = Rig::new();
    rig.body.falling = true;
    rig.controller.airborne_ms = 20.0;

    rig.tick(frame(), &FakeInput::default());

    assert_eq!(rig.controller.airborne_ms, 36.0);
}

#[test]
fn test_spawned_player_cannot_coyote_jump() {
    let tuning = PlayerTuning::default();
    let controller = PlayerController::new(&tuning);
    assert!(controller.airborne_ms >= tuning.max_airborne_jump_ms);
}

// -----------------------------------------------------------------------------
// Kick
// -----------------------------------------------------------------------------

#[test]
fn test_kick_adds_one_shape_and_completion_removes_it() {
    let mut rig = Rig::new();
    let kick = FakeInput::holding(&[Action::Kick]);

    rig.tick(frame(), &kick);
    assert!(rig.controller.kicking);
    assert_eq!(rig.body.shapes.len(), 2);
    assert!(rig.animation.is_current(PlayerAnimation::Kick));
    assert_eq!(rig.animation.on_complete, Some(AnimationCompletion::EndKick));

    // Holding kick does not stack hitboxes.
    rig.tick(frame(), &kick);
    assert_eq!(rig.body.shapes.len(), 2);

    rig.animation.finish_cycle = true;
    rig.tick(frame(), &FakeInput::default());
    assert!(!rig.controller.kicking);
    assert_eq!(rig.body.shapes.len(), 1);

    rig.tick(frame(), &FakeInput::default());
    assert!(rig.animation.is_current(PlayerAnimation::Idle));
}

#[test]
fn test_held_kick_keeps_ending_and_restarting() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::new(&tuning);
    let mut body = PlayerBody::new(&tuning, Vec2::ZERO);
    body.on_ground = true;
    let mut animator = SpriteAnimator::default();
    let kick = FakeInput::holding(&[Action::Kick]);

    let mut kicks_ended = 0;
    for _ in 0..60 {
        let was_kicking = controller.kicking;
        tick_live(&mut controller, &mut body, &mut animator, &kick);
        if was_kicking && !controller.kicking {
            kicks_ended += 1;
        }
        assert!(body.shapes.len() <= 2);
    }
    // 960ms of holding covers several 200ms kick cycles.
    assert!(kicks_ended >= 3, "kicks ended: {}", kicks_ended);

    for _ in 0..20 {
        tick_live(&mut controller, &mut body, &mut animator, &FakeInput::default());
    }
    assert!(!controller.kicking);
    assert_eq!(body.shapes.len(), 1);
    assert!(animator.is_current(PlayerAnimation::Idle));
}

#[test]
fn test_kick_shape_follows_facing() {
    let mut rig = Rig::new();

    rig.tick(frame(), &FakeInput::holding(&[Action::Left, Action::Kick]));

    let shape = rig.body.shapes[KICK_SHAPE_INDEX];
    assert_eq!(shape.min, Vec2::new(-20.0, 15.0));
    assert_eq!(shape.size(), Vec2::new(17.0, 7.0));
}

#[test]
fn test_kick_freezes_sprite_flip_but_not_movement() {
    let mut rig = Rig::new();
    rig.tick(frame(), &FakeInput::holding(&[Action::Kick]));

    rig.tick(frame(), &FakeInput::holding(&[Action::Left]));

    assert!(!rig.animation.flipped);
    assert_eq!(rig.body.velocity.x, -2.0);
    assert_eq!(rig.controller.direction, Vec2::NEG_X);
}

#[test]
fn test_no_kick_while_knockbacked() {
    let mut rig = Rig::new();
    rig.controller.knockbacked = true;

    rig.tick(frame(), &FakeInput::holding(&[Action::Kick]));

    assert!(!rig.controller.kicking);
    assert_eq!(rig.body.shapes.len(), 1);
}

#[test]
fn test_stale_kick_completion_is_ignored() {
    let mut rig = Rig::new();

    rig.controller
        .complete_animation(AnimationCompletion::EndKick, &mut rig.body);

    assert_eq!(rig.body.shapes.len(), 1);
}

// -----------------------------------------------------------------------------
// Animation selection
// -----------------------------------------------------------------------------

#[test]
fn test_animation_priority() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::new(&tuning);
    let mut body = FakeBody::new(&tuning);

    assert_eq!(controller.animation_for(&body), PlayerAnimation::Idle);

    body.velocity.x = 1.0;
    assert_eq!(controller.animation_for(&body), PlayerAnimation::Walk);

    body.falling = true;
    assert_eq!(controller.animation_for(&body), PlayerAnimation::Fall);

    body.jumping = true;
    assert_eq!(controller.animation_for(&body), PlayerAnimation::Jump);

    controller.knockbacked = true;
    assert_eq!(controller.animation_for(&body), PlayerAnimation::Stun);

    controller.kicking = true;
    assert_eq!(controller.animation_for(&body), PlayerAnimation::Kick);
}

#[test]
fn test_animation_selection_is_idempotent() {
    let mut rig = Rig::new();
    let input = FakeInput::default();

    rig.tick(frame(), &input);
    rig.tick(frame(), &input);
    rig.tick(frame(), &input);

    assert_eq!(rig.animation.set_calls, 1);
}

// -----------------------------------------------------------------------------
// Knockback and hit
// -----------------------------------------------------------------------------

#[test]
fn test_knockback_from_rest() {
    let mut rig = Rig::new();

    rig.controller
        .knockback(&mut rig.body, Some(8.0), Some(Vec2::new(1.0, 0.0)));

    assert_eq!(rig.body.velocity, Vec2::new(-80.0, -8.0));
    assert!(rig.controller.knockbacked);
}

#[test]
fn test_knockback_defaults_and_adds_to_velocity() {
    let mut rig = Rig::new();
    rig.controller.direction = Vec2::NEG_X;
    rig.body.velocity = Vec2::new(1.0, 1.0);

    rig.controller.knockback(&mut rig.body, None, None);

    assert_eq!(rig.body.velocity, Vec2::new(21.0, -1.0));
}

#[test]
fn test_hit_starts_flicker() {
    let mut rig = Rig::new();

    rig.controller.hit(&mut rig.animation);

    assert!(rig.animation.is_flickering());
    assert_eq!(rig.animation.flicker_calls, 1);
}

// -----------------------------------------------------------------------------
// Collision response policy
// -----------------------------------------------------------------------------

#[test]
fn test_kick_shape_is_never_solid() {
    let mut rig = Rig::new();
    rig.controller.knockbacked = true;
    let mut boar = FakeBoar::default();
    let mut piglet = FakePiglet::default();

    assert!(!rig.collide(kick_contact(0), Contacted::Unhandled));
    assert!(!rig.collide(kick_contact(0), Contacted::Boar(&mut boar)));
    assert!(!rig.collide(kick_contact(1), Contacted::Boar(&mut boar)));
    assert!(!rig.collide(kick_contact(0), Contacted::Ball));
    assert!(!rig.collide(kick_contact(0), Contacted::Piglet(&mut piglet)));

    // The kick hitbox has no side effects of its own.
    assert!(rig.controller.knockbacked);
    assert!(!boar.stunned);
    assert_eq!(piglet.rescues, 0);
}

#[test]
fn test_ball_is_never_solid() {
    let mut rig = Rig::new();

    assert!(!rig.collide(body_contact(0, Vec2::new(0.0, 3.0)), Contacted::Ball));
}

#[test]
fn test_piglet_is_rescued_and_never_solid() {
    let mut rig = Rig::new();
    let mut piglet = FakePiglet::default();

    assert!(!rig.collide(body_contact(0, Vec2::X), Contacted::Piglet(&mut piglet)));
    assert!(!rig.collide(body_contact(1, Vec2::X), Contacted::Piglet(&mut piglet)));

    assert_eq!(piglet.rescues, 2);
}

#[test]
fn test_boar_body_hit_applies_one_knockback_and_flicker() {
    let mut rig = Rig::new();
    let mut boar = FakeBoar {
        position: Vec2::new(100.0, 0.0),
        ..Default::default()
    };
    rig.body.position = Vec2::new(50.0, 0.0);
    rig.body.velocity = Vec2::new(2.0, 3.0);

    let solid = rig.collide(body_contact(0, Vec2::new(4.0, 0.0)), Contacted::Boar(&mut boar));

    assert!(!solid);
    assert_eq!(rig.body.velocity, Vec2::new(-80.0, -8.0));
    assert!(rig.controller.knockbacked);
    assert_eq!(rig.animation.flicker_calls, 1);

    // Invincible: further contacts pass through without another impulse.
    let solid = rig.collide(body_contact(0, Vec2::new(4.0, 0.0)), Contacted::Boar(&mut boar));
    assert!(!solid);
    assert_eq!(rig.body.velocity, Vec2::new(-80.0, -8.0));
    assert_eq!(rig.animation.flicker_calls, 1);
}

#[test]
fn test_boar_on_the_left_knocks_player_right() {
    let mut rig = Rig::new();
    let mut boar = FakeBoar {
        position: Vec2::new(10.0, 0.0),
        ..Default::default()
    };
    rig.body.position = Vec2::new(50.0, 0.0);

    rig.collide(body_contact(0, Vec2::new(-4.0, 0.0)), Contacted::Boar(&mut boar));

    assert_eq!(rig.body.velocity, Vec2::new(80.0, -8.0));
}

#[test]
fn test_stunned_boar_body_is_harmless_and_solid() {
    let mut rig = Rig::new();
    let mut boar = FakeBoar {
        stunned: true,
        ..Default::default()
    };

    let solid = rig.collide(body_contact(0, Vec2::X), Contacted::Boar(&mut boar));

    assert!(solid);
    assert_eq!(rig.body.velocity, Vec2::ZERO);
    assert_eq!(rig.animation.flicker_calls, 0);
}

#[test]
fn test_head_bounce_stuns_boar() {
    let mut rig = Rig::new();
    let mut boar = FakeBoar {
        position: Vec2::new(10.0, 20.0),
        ..Default::default()
    };

    let solid = rig.collide(
        body_contact(1, Vec2::new(0.0, 6.0)),
        Contacted::Boar(&mut boar),
    );

    assert!(!solid);
    assert!(boar.stunned);
    assert_eq!(rig.body.velocity, Vec2::new(-1.0, -8.0));

    // Already stunned: no second bounce, stays pass-through.
    rig.body.velocity = Vec2::new(0.0, 2.0);
    let solid = rig.collide(
        body_contact(1, Vec2::new(0.0, 6.0)),
        Contacted::Boar(&mut boar),
    );
    assert!(!solid);
    assert_eq!(rig.body.velocity, Vec2::new(0.0, 2.0));
}

#[test]
fn test_side_contact_with_weak_point_is_solid() {
    let mut rig = Rig::new();
    let mut boar = FakeBoar {
        position: Vec2::new(10.0, 20.0),
        ..Default::default()
    };

    let solid = rig.collide(
        body_contact(1, Vec2::new(3.0, 0.0)),
        Contacted::Boar(&mut boar),
    );

    assert!(solid);
    assert!(!boar.stunned);
}

#[test]
fn test_head_bounce_ignores_overlap_when_player_is_not_primary() {
    let mut rig = Rig::new();
    let mut boar = FakeBoar {
        position: Vec2::new(10.0, 20.0),
        ..Default::default()
    };
    let response = CollisionResponse {
        a: Party::Other,
        index_shape_a: 1,
        index_shape_b: 0,
        overlap_v: Vec2::new(0.0, 6.0),
    };

    assert!(rig.collide(response, Contacted::Boar(&mut boar)));
    assert_eq!(boar.stun_calls, 0);
}

#[test]
fn test_terrain_contact_ends_hit_stun() {
    let mut rig = Rig::new();
    rig.controller.knockbacked = true;

    assert!(rig.collide(body_contact(0, Vec2::ZERO), Contacted::Unhandled));
    assert!(!rig.controller.knockbacked);
}

#[test]
fn test_collisions_run_inside_update() {
    let mut rig = Rig::new();
    rig.controller.knockbacked = true;
    rig.collisions = FakeCollisions::with(vec![
        (body_contact(0, Vec2::X), FakeParty::Piglet(FakePiglet::default())),
        (body_contact(0, Vec2::ZERO), FakeParty::Terrain),
        (body_contact(0, Vec2::X), FakeParty::Ball),
        (
            body_contact(0, Vec2::X),
            FakeParty::Boar(FakeBoar {
                stunned: true,
                ..Default::default()
            }),
        ),
    ]);

    rig.tick(frame(), &FakeInput::default());

    assert_eq!(rig.collisions.verdicts, vec![false, true, false, true]);
    assert!(!rig.controller.knockbacked);
    assert!(matches!(
        &rig.collisions.contacts[0].1,
        FakeParty::Piglet(piglet) if piglet.rescues == 1
    ));
    // Stun was lifted before animation selection.
    assert!(rig.animation.is_current(PlayerAnimation::Idle));
}

// -----------------------------------------------------------------------------
// Narrow phase
// -----------------------------------------------------------------------------

#[test]
fn test_overlap_vector_picks_shallow_axis() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);

    assert_eq!(
        overlap_vector(a, Rect::new(8.0, 2.0, 20.0, 8.0)),
        Some(Vec2::new(2.0, 0.0))
    );
    assert_eq!(
        overlap_vector(a, Rect::new(1.0, 7.0, 9.0, 20.0)),
        Some(Vec2::new(0.0, 3.0))
    );
    assert_eq!(
        overlap_vector(a, Rect::new(-5.0, 1.0, 1.0, 9.0)),
        Some(Vec2::new(-1.0, 0.0))
    );
}

#[test]
fn test_overlap_vector_ignores_touching_boxes() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);

    assert_eq!(overlap_vector(a, Rect::new(10.0, 0.0, 20.0, 10.0)), None);
    assert_eq!(overlap_vector(a, Rect::new(30.0, 30.0, 40.0, 40.0)), None);
}

fn scan_target(position: Vec2, shapes: Vec<Rect>, state: TargetState) -> ScanTarget {
    ScanTarget {
        entity: Entity::PLACEHOLDER,
        position,
        shapes,
        state,
    }
}

#[test]
fn test_contact_scan_rescues_overlapping_piglet() {
    let mut rig = Rig::new();
    let mut scan = ContactScan::new(Vec::new());
    scan.push(scan_target(
        Vec2::new(20.0, 0.0),
        vec![Rect::new(0.0, 0.0, 16.0, 16.0)],
        TargetState::Piglet(PigletContact::default()),
    ));
    scan.push(scan_target(
        Vec2::new(200.0, 0.0),
        vec![Rect::new(0.0, 0.0, 16.0, 16.0)],
        TargetState::Piglet(PigletContact::default()),
    ));

    let shapes = rig.body.shapes.clone();
    scan.check(Vec2::ZERO, &shapes, &mut |response, other| {
        rig.controller
            .on_collision(response, other, &mut rig.body, &mut rig.animation)
    });

    let rescued: Vec<bool> = scan
        .targets
        .iter()
        .map(|target| matches!(&target.state, TargetState::Piglet(p) if p.rescued))
        .collect();
    assert_eq!(rescued, vec![true, false]);
    assert_eq!(scan.separation, Vec2::ZERO);
}

#[test]
fn test_contact_scan_accumulates_solid_separation() {
    let mut rig = Rig::new();
    let mut scan = ContactScan::new(Vec::new());
    scan.push(scan_target(
        Vec2::new(20.0, 0.0),
        vec![Rect::new(0.0, 0.0, 16.0, 24.0)],
        TargetState::Other,
    ));

    let shapes = rig.body.shapes.clone();
    scan.check(Vec2::ZERO, &shapes, &mut |response, other| {
        rig.controller
            .on_collision(response, other, &mut rig.body, &mut rig.animation)
    });

    assert_eq!(scan.separation, Vec2::new(4.0, 0.0));
}

#[test]
fn test_contact_scan_stomp_stuns_boar() {
    let mut rig = Rig::new();
    rig.body.position = Vec2::new(0.0, 0.0);
    let mut scan = ContactScan::new(Vec::new());
    // Weak point pokes 6px above the boar's box, the player's feet sink 4px into it.
    scan.push(scan_target(
        Vec2::new(0.0, 26.0),
        vec![
            Rect::new(0.0, 6.0, 32.0, 24.0),
            Rect::new(0.0, -6.0, 32.0, 6.0),
        ],
        TargetState::Boar(BoarContact {
            position: Vec2::new(0.0, 26.0),
            stunned: false,
        }),
    ));

    let shapes = rig.body.shapes.clone();
    scan.check(Vec2::ZERO, &shapes, &mut |response, other| {
        rig.controller
            .on_collision(response, other, &mut rig.body, &mut rig.animation)
    });

    assert!(matches!(
        &scan.targets[0].state,
        TargetState::Boar(boar) if boar.stunned
    ));
    assert_eq!(rig.body.velocity.y, -8.0);
    assert!(!rig.controller.knockbacked);
}

#[test]
fn test_contact_scan_reports_terrain_contacts() {
    let mut rig = Rig::new();
    rig.controller.knockbacked = true;
    let mut scan = ContactScan::new(vec![Entity::PLACEHOLDER]);

    let shapes = rig.body.shapes.clone();
    scan.check(Vec2::ZERO, &shapes, &mut |response, other| {
        rig.controller
            .on_collision(response, other, &mut rig.body, &mut rig.animation)
    });

    assert!(!rig.controller.knockbacked);
    assert_eq!(scan.separation, Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// PlayerBody
// -----------------------------------------------------------------------------

#[test]
fn test_body_gravity_and_falling() {
    let tuning = PlayerTuning::default();
    let mut body = PlayerBody::new(&tuning, Vec2::ZERO);
    body.jumping = true;

    assert!(body.integrate(Step::new(16.0, 1.0)));

    assert_eq!(body.velocity.y, tuning.gravity);
    assert!(body.falling);
    assert!(!body.jumping);
}

#[test]
fn test_body_rests_on_ground() {
    let tuning = PlayerTuning::default();
    let mut body = PlayerBody::new(&tuning, Vec2::ZERO);
    body.on_ground = true;

    assert!(!body.integrate(Step::new(16.0, 1.0)));

    assert_eq!(body.velocity.y, 0.0);
    assert!(!body.falling);
}

#[test]
fn test_body_clamps_to_max_velocity() {
    let tuning = PlayerTuning::default();
    let mut body = PlayerBody::new(&tuning, Vec2::ZERO);
    body.velocity = Vec2::new(-80.0, -20.0);

    body.integrate(Step::new(16.0, 1.0));

    assert_eq!(body.velocity.x, -tuning.max_velocity_x);
    assert_eq!(body.velocity.y, -tuning.max_velocity_y);
}

#[test]
fn test_body_separation_lands_player() {
    let tuning = PlayerTuning::default();
    let mut body = PlayerBody::new(&tuning, Vec2::new(0.0, 10.0));
    body.velocity = Vec2::new(1.0, 4.0);
    body.falling = true;

    body.separate(Vec2::new(0.0, 3.0));

    assert_eq!(body.position, Vec2::new(0.0, 7.0));
    assert_eq!(body.velocity, Vec2::new(1.0, 0.0));
    assert!(!body.falling);
    assert_eq!(body.world_shapes().next(), Some(Rect::new(0.0, 7.0, 24.0, 31.0)));
}

#[test]
fn test_physics_velocity_is_clamped_after_knockback() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::new(&tuning);
    let mut body = PlayerBody::new(&tuning, Vec2::ZERO);

    controller.knockback(&mut body, Some(8.0), Some(Vec2::X));

    // The controller keeps the full impulse; the physics engine gets the clamped one.
    assert_eq!(body.velocity, Vec2::new(-80.0, -8.0));
    let written = body.physics_velocity();
    assert_eq!(written, Vec2::new(-120.0, 480.0));
    let limit = world_velocity(body.max_velocity).abs();
    assert!(written.x.abs() <= limit.x && written.y.abs() <= limit.y);
}

#[test]
fn test_body_ceiling_stops_rise_without_ending_jump() {
    let tuning = PlayerTuning::default();
    let mut body = PlayerBody::new(&tuning, Vec2::ZERO);
    body.velocity.y = -tuning.max_velocity_y;
    body.jumping = true;
    body.on_ceiling = true;

    body.integrate(Step::new(16.0, 1.0));
    assert_eq!(body.velocity.y, 0.0);
    assert!(body.jumping);
    assert!(!body.falling);

    body.integrate(Step::new(16.0, 1.0));
    assert_eq!(body.velocity.y, tuning.gravity);
    assert!(body.falling);
    assert!(!body.jumping);
}

#[test]
fn test_jump_into_ceiling_falls_on_the_next_tick() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::new(&tuning);
    let mut body = PlayerBody::new(&tuning, Vec2::ZERO);
    body.on_ground = true;
    let mut animator = SpriteAnimator::default();
    let jump = FakeInput::holding(&[Action::Jump]);

    tick_live(&mut controller, &mut body, &mut animator, &jump);
    assert!(body.jumping);
    assert!(body.velocity.y < 0.0);

    body.on_ground = false;
    body.on_ceiling = true;
    tick_live(&mut controller, &mut body, &mut animator, &jump);
    assert_eq!(body.velocity.y, 0.0);

    // Still pressed against the ceiling, but gravity wins and no new jump starts.
    tick_live(&mut controller, &mut body, &mut animator, &jump);
    assert!(body.falling);
    assert!(!body.jumping);
    assert!(animator.is_current(PlayerAnimation::Fall));
}

#[test]
fn test_body_separation_from_ceiling_stops_rise() {
    let tuning = PlayerTuning::default();
    let mut body = PlayerBody::new(&tuning, Vec2::new(0.0, 10.0));
    body.velocity = Vec2::new(1.0, -8.0);
    body.jumping = true;

    body.separate(Vec2::new(0.0, -3.0));

    assert_eq!(body.position, Vec2::new(0.0, 13.0));
    assert_eq!(body.velocity, Vec2::new(1.0, 0.0));
    assert!(body.jumping);
}
