// src/config.rs
mod loader;

pub use loader::{CONFIG_FILE_NAME, discover_config, load_config_file};

use crate::core::analyzer::DEFAULT_TOP_WORDS_COUNT;
use crate::core::chart::{ChartOptions, DEFAULT_BAR_COLOR};
use crate::core::report::ReportFormat;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings read from `wordstat.toml`. Every key is optional.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub top_words_count: usize,
    /// Falls back to `top_words_count` when unset.
    pub chart_top_words_count: Option<usize>,
    pub output_dir: PathBuf,
    /// File stem of the report; the extension follows `format`.
    pub results_file: String,
    pub chart_file: String,
    pub bar_color: String,
    pub format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_words_count: DEFAULT_TOP_WORDS_COUNT,
            chart_top_words_count: None,
            output_dir: PathBuf::from("output"),
            results_file: String::from("analyzer_result"),
            chart_file: String::from("word_frequencies.svg"),
            bar_color: String::from(DEFAULT_BAR_COLOR),
            format: ReportFormat::default(),
        }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn chart_top_words_count(&self) -> usize {
        self.chart_top_words_count.unwrap_or(self.top_words_count)
    }

    #[must_use]
    pub fn results_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.results_file, self.format.extension()))
    }

    #[must_use]
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.chart_file)
    }

    #[must_use]
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            top_n: self.chart_top_words_count(),
            bar_color: self.bar_color.clone(),
        }
    }
}
