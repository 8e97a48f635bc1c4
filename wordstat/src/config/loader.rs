// src/config/loader.rs
use crate::config::Config;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "wordstat.toml";

/// Reads and parses a specific config file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Loads settings from the nearest `wordstat.toml`, starting at `dir` and
/// walking up through its parents until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory, usually the document's own directory
///
/// # Returns
///
/// * `Ok(Config)` - The parsed settings, or the defaults when no file exists
///
/// # Errors
///
/// This function may return an error if:
/// * A config file exists but cannot be read
/// * The file contains invalid TOML or unknown keys
#[inline]
pub fn discover_config(dir: &Path) -> Result<Config> {
    let mut current_dir: PathBuf = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            tracing::debug!(path = %config_file.display(), "using config file");
            return load_config_file(&config_file);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(Config::default())
}
