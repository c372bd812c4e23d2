//! Loader for RON content files.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelDef;
use crate::player::PlayerTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a RON document, tagging errors with `file`.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

/// Load `player.ron` from the data directory.
pub fn load_player_tuning(data_dir: &Path) -> Result<PlayerTuning, ContentLoadError> {
    load_single_file(&data_dir.join("player.ron"))
}

/// Load `<name>.ron` from the levels directory.
pub fn load_level(levels_dir: &Path, name: &str) -> Result<LevelDef, ContentLoadError> {
    let level: LevelDef = load_single_file(&levels_dir.join(format!("{}.ron", name)))?;
    if level.name != name {
        return Err(ContentLoadError {
            file: format!("{}.ron", name),
            message: format!("level file declares name '{}'", level.name),
        });
    }
    Ok(level)
}
