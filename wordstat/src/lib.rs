// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use config::{Config, discover_config, load_config_file};
pub use crate::core::analyzer::{DEFAULT_TOP_WORDS_COUNT, TextAnalyzer, analyze};
pub use crate::core::chart::{ChartOptions, chart_svg, render_chart};
pub use crate::core::report::{ReportFormat, save_results};
pub use crate::core::source::{SourceKind, extract_text};
pub use error::SourceError;
pub use models::{TextStats, WordFrequencyTable};
