// src/core/report.rs
use crate::models::TextStats;
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Human-readable formats for the saved statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
}

impl ReportFormat {
    #[inline]
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Serializes `stats` into this format.
    ///
    /// JSON is indented with four spaces and keeps non-ASCII characters as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(self, stats: &TextStats) -> Result<String> {
        match self {
            Self::Json => {
                let mut buffer = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
                stats
                    .serialize(&mut serializer)
                    .context("Failed to serialize statistics as JSON")?;
                String::from_utf8(buffer).context("Serialized JSON is not valid UTF-8")
            }
            Self::Yaml => {
                serde_yaml_ng::to_string(stats).context("Failed to serialize statistics as YAML")
            }
        }
    }
}

/// Writes `stats` to `path` in the given format.
///
/// # Arguments
///
/// * `stats` - The statistics record to persist
/// * `path` - Destination file; missing parent directories are created
/// * `format` - Output format
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path that was written
///
/// # Errors
///
/// This function may return an error if:
/// * The parent directory cannot be created
/// * Serialization fails
/// * The file cannot be written
pub fn save_results(stats: &TextStats, path: &Path, format: ReportFormat) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let content = format.render(stats)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write results: {}", path.display()))?;

    tracing::info!(path = %path.display(), ?format, "saved results");
    Ok(path.to_path_buf())
}
