//! Level domain: level spawning and teardown.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::content::{ContentPaths, LevelDef, TerrainKind, load_level};
use crate::creatures::{
    BALL_SIZE, BOAR_SIZE, BOAR_WEAK_POINT_DEPTH, Ball, Boar, Hitboxes, PIGLET_SIZE, Piglet,
};
use crate::player::{GameLayer, PlayerTuning, Terrain, spawn_player, world_center};
use crate::sprites::SpriteManifest;

/// Request to replace the current level with the named one.
#[derive(Debug, Clone)]
pub struct LoadLevel {
    pub name: String,
}

impl Message for LoadLevel {}

/// Everything owned by the loaded level, despawned when it is replaced.
#[derive(Component, Debug)]
pub struct LevelEntity;

const GROUND_COLOR: Color = Color::srgb(0.35, 0.4, 0.35);
const WALL_COLOR: Color = Color::srgb(0.25, 0.25, 0.35);
const BOAR_COLOR: Color = Color::srgb(0.55, 0.35, 0.25);
const PIGLET_COLOR: Color = Color::srgb(1.0, 0.7, 0.75);
const BALL_COLOR: Color = Color::srgb(0.9, 0.85, 0.3);

pub(crate) fn load_requested_levels(
    mut commands: Commands,
    mut requests: MessageReader<LoadLevel>,
    paths: Res<ContentPaths>,
    tuning: Res<PlayerTuning>,
    manifest: Res<SpriteManifest>,
    existing: Query<Entity, With<LevelEntity>>,
) {
    // Only the latest request matters.
    let Some(request) = requests.read().last() else {
        return;
    };

    let level = match load_level(&paths.levels_dir, &request.name) {
        Ok(level) => level,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    spawn_level(&mut commands, &level, &tuning, &manifest);
}

pub(crate) fn despawn_level(mut commands: Commands, existing: Query<Entity, With<LevelEntity>>) {
    let mut count = 0;
    for entity in &existing {
        commands.entity(entity).despawn();
        count += 1;
    }
    info!("Despawned level ({} entities)", count);
}

/// Spawn every entity described by `level`.
pub(crate) fn spawn_level(
    commands: &mut Commands,
    level: &LevelDef,
    tuning: &PlayerTuning,
    manifest: &SpriteManifest,
) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    for terrain in &level.terrain {
        let size = terrain.rect.size();
        let center = world_center(terrain.rect.top_left(), size);
        let (color, layers) = match terrain.kind {
            TerrainKind::Ground => (GROUND_COLOR, ground_layers),
            TerrainKind::Wall => (WALL_COLOR, wall_layers),
        };

        commands.spawn((
            LevelEntity,
            Terrain,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
        ));
    }

    for point in &level.boars {
        spawn_creature(
            commands,
            (*point).into(),
            Hitboxes::with_weak_point(BOAR_SIZE, BOAR_WEAK_POINT_DEPTH),
            BOAR_COLOR,
            Boar::default(),
        );
    }

    for point in &level.piglets {
        spawn_creature(
            commands,
            (*point).into(),
            Hitboxes::single(PIGLET_SIZE),
            PIGLET_COLOR,
            Piglet::default(),
        );
    }

    for point in &level.balls {
        spawn_creature(
            commands,
            (*point).into(),
            Hitboxes::single(BALL_SIZE),
            BALL_COLOR,
            Ball,
        );
    }

    let player = spawn_player(commands, tuning, manifest, level.spawn.into());
    commands.entity(player).insert(LevelEntity);

    info!(
        "Loaded level '{}': {} terrain, {} boars, {} piglets, {} balls",
        level.name,
        level.terrain.len(),
        level.boars.len(),
        level.piglets.len(),
        level.balls.len()
    );
}

fn spawn_creature(
    commands: &mut Commands,
    top_left: Vec2,
    hitboxes: Hitboxes,
    color: Color,
    kind: impl Bundle,
) {
    let center = world_center(top_left, hitboxes.size);
    commands.spawn((
        LevelEntity,
        kind,
        Sprite {
            color,
            custom_size: Some(hitboxes.size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.5),
        hitboxes,
    ));
}
