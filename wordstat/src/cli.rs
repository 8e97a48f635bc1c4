// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{Config, discover_config, load_config_file};
use crate::core::analyzer::TextAnalyzer;
use crate::core::chart::render_chart;
use crate::core::report::{ReportFormat, save_results};
use crate::core::source::SourceKind;
use crate::utils::print_stats;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Document to analyze (.txt, .md or .pdf)
    pub path: PathBuf,

    /// Number of most common words to report
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// Number of words to plot (defaults to --top)
    #[arg(long)]
    pub chart_top: Option<usize>,

    /// Directory for the results file and chart
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Format of the saved results
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Skip rendering the word frequency chart
    #[arg(long)]
    pub no_chart: bool,

    /// Print the extracted text before the statistics
    #[arg(long)]
    pub print_text: bool,

    /// Config file to use instead of searching for wordstat.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Builds the effective settings: defaults, then the config file, then flags.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The current directory cannot be determined
    /// * A config file exists but cannot be read or parsed
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = if let Some(path) = &self.config {
            load_config_file(path)?
        } else {
            discover_config(&document_dir(&self.path)?)?
        };

        if let Some(top) = self.top {
            config.top_words_count = top;
        }
        if let Some(chart_top) = self.chart_top {
            config.chart_top_words_count = Some(chart_top);
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir.clone_from(output_dir);
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        Ok(config)
    }
}

pub fn run(args: Args) -> Result<()> {
    // Unsupported extensions are rejected before any file is read
    let kind = SourceKind::from_path(&args.path)?;
    let config = args.resolve_config()?;

    let text = kind.extract_text(&args.path);
    if args.print_text {
        println!("{text}");
    }

    let analyzer = TextAnalyzer::new(config.top_words_count);
    let (stats, word_count) = analyzer.analyze(&text);
    print_stats(&stats);

    let results_path = save_results(&stats, &config.results_path(), config.format)?;
    println!("Results saved as {}", results_path.display());

    if !args.no_chart {
        let chart_path = config.chart_path();
        render_chart(&word_count, &chart_path, &config.chart_options())
            .with_context(|| format!("Failed to render chart for {}", args.path.display()))?;
        println!("Word frequency plot saved as {}", chart_path.display());
    }

    Ok(())
}

fn document_dir(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    Ok(absolute
        .parent()
        .map_or_else(|| absolute.clone(), Path::to_path_buf))
}
