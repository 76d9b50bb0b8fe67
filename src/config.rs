use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::LookupTable;
use crate::error::{Error, Result};
use crate::template::EmitOptions;

/// Contents of the optional YAML config file. Every key may be omitted.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sprite_sheet: SpriteSheetConfig,
    pub world_map: WorldMapConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SpriteSheetConfig {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WorldMapConfig {
    pub ground_csv: Option<PathBuf>,
    pub obstruction_csv: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub ground_table: LookupTable,
    pub obstruction_table: LookupTable,
    pub emit: EmitOptions,
}

impl Default for WorldMapConfig {
    fn default() -> Self {
        Self {
            ground_csv: None,
            obstruction_csv: None,
            output: None,
            ground_table: LookupTable::ground(),
            obstruction_table: LookupTable::obstruction(),
            emit: EmitOptions::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self> {
        serde_yaml::from_str(text)
            .map_err(|e| Error::Config(format!("invalid config {}: {e}", origin.display())))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_yaml(&text, path)
    }

    /// Loads `path` when given, built-in defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Picks the CLI value over the config value; errors when neither is set.
pub fn require_path(
    flag: Option<PathBuf>,
    configured: Option<PathBuf>,
    name: &str,
) -> Result<PathBuf> {
    flag.or(configured)
        .ok_or_else(|| Error::Config(format!("no {name} given on the command line or in the config file")))
}
