//! JSON persistence helpers for files in the tilesnake config directory.

use crate::core::constants::CONFIG_FILE_NAME;
use crate::snake::types::GameConfig;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Platform config directory for tilesnake, created if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "tilesnake").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine config directory",
        )
    })?;
    let dir = project_dirs.config_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file in the config directory.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = %path.display(), "invalid JSON, using defaults");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}

/// Saved title-screen choices and behavior switches.
pub fn load_config() -> GameConfig {
    match save_path(CONFIG_FILE_NAME) {
        Ok(path) => load_json_or_default(&path),
        Err(_) => GameConfig::default(),
    }
}

pub fn save_config(config: &GameConfig) -> io::Result<()> {
    save_json(&save_path(CONFIG_FILE_NAME)?, config)
}
