//! Content domain: RON tuning and level files.

mod data;
mod loader;


pub use data::{LevelDef, PointDef, RectDef, TerrainDef, TerrainKind};
pub use loader::{ContentLoadError, load_level, load_player_tuning, parse_ron};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::player::PlayerTuning;
use crate::sprites::SpriteManifest;

/// Where content files live on disk.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
    pub levels_dir: PathBuf,
    pub sprite_manifest: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
            levels_dir: PathBuf::from("assets/levels"),
            sprite_manifest: PathBuf::from("assets/sprites/manifest.json"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .init_resource::<PlayerTuning>()
            .init_resource::<SpriteManifest>()
            .add_systems(Startup, load_content);
    }
}

/// Load tuning and the sprite manifest, keeping defaults on failure.
pub(crate) fn load_content(
    paths: Res<ContentPaths>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut tuning: ResMut<PlayerTuning>,
    mut manifest: ResMut<SpriteManifest>,
) {
    match load_player_tuning(&paths.data_dir) {
        Ok(loaded) => {
            info!("Loaded player tuning from {:?}", paths.data_dir);
            *tuning = loaded;
        }
        Err(e) => warn!("{}; using default player tuning", e),
    }

    manifest.load_from_file(&paths.sprite_manifest, &asset_server, &mut layouts);
}
