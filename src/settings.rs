use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Optional defaults read from `~/.config/mint-convert/settings.json`.
/// Command-line flags always win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Remap file used when `--categories` is not given.
    #[serde(default)]
    pub categories_file: Option<String>,
    /// Always pre-validate before writing.
    #[serde(default)]
    pub atomic: bool,
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("mint-convert")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Defaults when the file is absent; an unreadable file is an error rather
/// than silently ignored, since it changes what gets written.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ConvertError::Settings(format!("{}: {e}", path.display())))
}

pub fn load_settings() -> Result<Settings> {
    load_settings_from(&settings_path())
}

impl Settings {
    pub fn categories_path(&self) -> Option<PathBuf> {
        self.categories_file
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| PathBuf::from(shellexpand_path(p)))
    }
}

pub fn shellexpand_path(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}
