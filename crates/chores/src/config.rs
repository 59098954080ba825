use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chores_core::FilterMode;
use serde::Deserialize;

use crate::tui::constants::ADD_FLASH_TTL_MS;

const CONFIG_DIR: &str = "chores";
const CONFIG_FILE: &str = "config.toml";

/// User configuration loaded from the platform config dir.
///
/// A missing file means defaults; a malformed file is an error at startup.
/// Unlike task data this is developer-facing input, so it does not degrade
/// silently.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Data directory override.
    pub data_dir: Option<PathBuf>,
    /// Filter the TUI starts in.
    pub default_filter: FilterMode,
    /// How long a freshly added task stays highlighted, in milliseconds.
    pub highlight_ttl_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_filter: FilterMode::All,
            highlight_ttl_ms: ADD_FLASH_TTL_MS,
        }
    }
}

impl Config {
    /// Load from `<config dir>/chores/config.toml`, defaulting when the
    /// platform has no config dir or the file does not exist.
    pub fn load_default() -> Result<Self> {
        dirs::config_dir().map_or_else(
            || Ok(Self::default()),
            |dir| Self::from_path(&dir.join(CONFIG_DIR).join(CONFIG_FILE)),
        )
    }

    /// Load from an explicit path; missing files yield the defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}
