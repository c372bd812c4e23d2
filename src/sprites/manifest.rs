//! Sprite sheet manifest loading.
//!
//! Loads the sprite manifest JSON which maps sheet keys to their image and
//! grid layout.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Resource containing all loaded sprite sheets.
#[derive(Resource, Default)]
pub struct SpriteManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Map of sheet keys to their definitions.
    pub sheets: HashMap<String, SpriteSheetDef>,
    /// Loaded texture and atlas layout handles, keyed by sheet key.
    pub handles: HashMap<String, (Handle<Image>, Handle<TextureAtlasLayout>)>,
}

/// Definition of a single sprite sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteSheetDef {
    /// Path to the image file, relative to assets/.
    pub path: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub rows: u32,
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
pub struct ManifestJson {
    pub version: u32,
    pub sheets: HashMap<String, SpriteSheetDef>,
}

/// Parse manifest JSON text.
pub fn parse_manifest(contents: &str) -> Result<ManifestJson, serde_json::Error> {
    serde_json::from_str(contents)
}

impl SpriteManifest {
    /// Load the manifest from a JSON file.
    pub fn load_from_file(
        &mut self,
        path: &Path,
        asset_server: &AssetServer,
        layouts: &mut Assets<TextureAtlasLayout>,
    ) {
        if !path.exists() {
            info!(
                "Sprite manifest not found at {:?}, drawing placeholder rectangles",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return;
            }
        };

        let manifest_json = match parse_manifest(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse sprite manifest: {}", e);
                return;
            }
        };

        self.version = manifest_json.version;
        self.sheets = manifest_json.sheets;

        for (key, def) in &self.sheets {
            let image = asset_server.load(&def.path);
            let layout = layouts.add(TextureAtlasLayout::from_grid(
                UVec2::new(def.frame_width, def.frame_height),
                def.columns,
                def.rows,
                None,
                None,
            ));
            self.handles.insert(key.clone(), (image, layout));
        }

        info!(
            "Loaded sprite manifest v{} with {} sheets",
            self.version,
            self.sheets.len()
        );
    }

    /// Sprite showing `index` of the sheet, if the sheet is loaded.
    pub fn sprite(&self, key: &str, index: usize) -> Option<Sprite> {
        let (image, layout) = self.handles.get(key)?;
        Some(Sprite::from_atlas_image(
            image.clone(),
            TextureAtlas {
                layout: layout.clone(),
                index,
            },
        ))
    }
}
