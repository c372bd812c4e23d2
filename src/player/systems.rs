//! Player domain: Bevy systems adapting the ECS world to the controller.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::InputPaused;
use crate::creatures::{Ball, Boar, BoarStunned, Hitboxes, Piglet, PigletRescued};
use crate::player::body::PlayerBody;
use crate::player::components::{GameLayer, Player, Terrain, screen_top_left, world_center};
use crate::player::contacts::{BoarContact, ContactScan, PigletContact, ScanTarget, TargetState};
use crate::player::controller::PlayerController;
use crate::player::input::KeyboardInput;
use crate::player::resources::{InputBindings, PlayerTuning};
use crate::player::services::{PlayerServices, Step};
use crate::sprites::{PlayerAnimation, SpriteAnimator, SpriteManifest};

/// Sprite sheet key of the player in the manifest.
pub const PLAYER_SHEET: &str = "player";

/// Spawn the player with its body top-left corner at `top_left` (screen space).
pub(crate) fn spawn_player(
    commands: &mut Commands,
    tuning: &PlayerTuning,
    manifest: &SpriteManifest,
    top_left: Vec2,
) -> Entity {
    let size = tuning.body_size();
    let center = world_center(top_left, size);

    let sprite = manifest
        .sprite(PLAYER_SHEET, PlayerAnimation::Idle.frames()[0])
        .unwrap_or_else(|| Sprite {
            color: Color::srgb(0.95, 0.75, 0.8),
            custom_size: Some(size),
            ..default()
        });

    info!("Spawning player at {:?}", top_left);

    commands
        .spawn((
            // Identity & control
            (
                Player,
                PlayerController::new(tuning),
                PlayerBody::new(tuning, top_left),
                SpriteAnimator::default(),
            ),
            Transform::from_xyz(center.x, center.y, 1.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // Gravity comes from PlayerBody::integrate
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .with_child((
            sprite,
            // The sprite sits slightly above the collision box.
            Transform::from_xyz(0.0, -tuning.sprite_offset_y, 0.0),
        ))
        .id()
}

/// Ray cast just below the player's feet for ground.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut PlayerBody), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not creatures or walls)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut body) in &mut query {
        let was_on_ground = body.on_ground;
        let ray_origin =
            transform.translation.truncate() - Vec2::new(0.0, body.size.y * 0.5 - 1.0);

        let hit = spatial_query.cast_ray(ray_origin, Dir2::NEG_Y, 2.0, true, &ground_filter);
        body.on_ground = hit.is_some();

        if body.on_ground != was_on_ground {
            debug!("Player on_ground={}", body.on_ground);
        }
    }
}

/// Ray cast just above the player's head for a ceiling, so a blocked jump
/// stops rising in the body as well as in the physics engine.
pub(crate) fn detect_ceiling(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut PlayerBody), With<Player>>,
) {
    let ceiling_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (transform, mut body) in &mut query {
        let ray_origin =
            transform.translation.truncate() + Vec2::new(0.0, body.size.y * 0.5 - 1.0);

        let hit = spatial_query.cast_ray(ray_origin, Dir2::Y, 2.0, true, &ceiling_filter);
        body.on_ceiling = hit.is_some();
    }
}

/// Run one controller tick against the live world.
#[allow(clippy::too_many_arguments)]
pub(crate) fn drive_player(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    paused: Res<InputPaused>,
    mut collision_starts: MessageReader<CollisionStart>,
    terrain: Query<(), With<Terrain>>,
    mut players: Query<
        (
            Entity,
            &mut PlayerController,
            &mut PlayerBody,
            &mut SpriteAnimator,
            &mut Transform,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut creatures: Query<
        (
            Entity,
            &Transform,
            &Hitboxes,
            Option<&mut Boar>,
            Option<&mut Piglet>,
            Has<Ball>,
        ),
        Without<Player>,
    >,
    mut stunned_events: MessageWriter<BoarStunned>,
    mut rescued_events: MessageWriter<PigletRescued>,
) {
    let Ok((player, mut controller, mut body, mut animator, mut transform, mut velocity)) =
        players.single_mut()
    else {
        collision_starts.clear();
        return;
    };

    let step = Step::from_secs(time.delta_secs());
    let size = body.size;
    body.position = screen_top_left(&transform, size);

    let terrain_contacts: Vec<Entity> = collision_starts
        .read()
        .filter_map(|event| {
            if event.collider1 == player {
                Some(event.collider2)
            } else if event.collider2 == player {
                Some(event.collider1)
            } else {
                None
            }
        })
        .filter(|other| terrain.contains(*other))
        .collect();

    let mut scan = ContactScan::new(terrain_contacts);
    for (entity, creature_transform, hitboxes, boar, piglet, is_ball) in &creatures {
        let position = screen_top_left(creature_transform, hitboxes.size);
        let state = if let Some(boar) = boar {
            TargetState::Boar(BoarContact {
                position,
                stunned: boar.stunned,
            })
        } else if let Some(piglet) = piglet {
            if piglet.rescued {
                continue;
            }
            TargetState::Piglet(PigletContact::default())
        } else if is_ball {
            TargetState::Ball
        } else {
            TargetState::Other
        };

        scan.push(ScanTarget {
            entity,
            position,
            shapes: hitboxes.shapes.clone(),
            state,
        });
    }

    let input = KeyboardInput::new(&keys, &bindings, paused.is_paused());
    let changed = controller.update(
        step,
        PlayerServices {
            input: &input,
            body: &mut *body,
            animation: animator.bypass_change_detection(),
            collisions: &mut scan,
        },
    );
    if changed {
        animator.set_changed();
    }

    body.separate(scan.separation);
    let center = world_center(body.position, size);
    transform.translation.x = center.x;
    transform.translation.y = center.y;
    velocity.0 = body.physics_velocity();

    for target in scan.targets {
        match target.state {
            TargetState::Boar(contact) if contact.stunned => {
                if let Ok((_, _, _, Some(mut boar), _, _)) = creatures.get_mut(target.entity) {
                    if !boar.stunned {
                        boar.stunned = true;
                        stunned_events.write(BoarStunned {
                            boar: target.entity,
                        });
                    }
                }
            }
            TargetState::Piglet(contact) if contact.rescued => {
                if let Ok((_, _, _, _, Some(mut piglet), _)) = creatures.get_mut(target.entity) {
                    piglet.rescued = true;
                    rescued_events.write(PigletRescued {
                        piglet: target.entity,
                    });
                }
            }
            _ => {}
        }
    }
}
