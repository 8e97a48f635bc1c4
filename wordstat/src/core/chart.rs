// src/core/chart.rs
//! SVG bar chart of word frequencies.

use crate::core::analyzer::DEFAULT_TOP_WORDS_COUNT;
use crate::models::WordFrequencyTable;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_BAR_COLOR: &str = "skyblue";

const BAR_WIDTH: usize = 40;
const BAR_GAP: usize = 16;
const MARGIN_LEFT: usize = 70;
const MARGIN_RIGHT: usize = 20;
const MARGIN_TOP: usize = 50;
const MARGIN_BOTTOM: usize = 110;
const PLOT_HEIGHT: usize = 260;
const MIN_PLOT_WIDTH: usize = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub top_n: usize,
    pub bar_color: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_WORDS_COUNT,
            bar_color: String::from(DEFAULT_BAR_COLOR),
        }
    }
}

/// Renders the most frequent words of `table` as a standalone SVG document.
///
/// Bars run left to right by descending count. An empty table still yields a
/// valid chart with axes and no bars.
#[must_use]
pub fn chart_svg(table: &WordFrequencyTable, options: &ChartOptions) -> String {
    let words = table.most_common(options.top_n);
    let max_count = words.iter().map(|(_, count)| *count).max().unwrap_or(0);

    let slot = BAR_WIDTH + BAR_GAP;
    let plot_width = (BAR_GAP + words.len() * slot).max(MIN_PLOT_WIDTH);
    let width = MARGIN_LEFT + plot_width + MARGIN_RIGHT;
    let height = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;
    let axis_y = MARGIN_TOP + PLOT_HEIGHT;
    let axis_right = MARGIN_LEFT + plot_width;
    let title_x = MARGIN_LEFT + plot_width / 2;
    let y_label_y = MARGIN_TOP + PLOT_HEIGHT / 2;
    let bar_color = escape_xml(&options.bar_color);

    let mut parts = vec![
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" role=\"img\" font-family=\"Verdana\">"
        ),
        format!("<rect width=\"{width}\" height=\"{height}\" fill=\"#fff\"/>"),
        format!(
            "<text x=\"{title_x}\" y=\"28\" font-size=\"16\" text-anchor=\"middle\">Top {} Most Common Words</text>",
            options.top_n
        ),
    ];

    for (i, (word, count)) in words.iter().enumerate() {
        let x = MARGIN_LEFT + BAR_GAP + i * slot;
        let bar_height = bar_height(*count, max_count);
        let y = axis_y - bar_height;
        let center = x + BAR_WIDTH / 2;
        let label_y = axis_y + 14;
        let word = escape_xml(word);

        parts.push(format!(
            "<rect class=\"bar\" x=\"{x}\" y=\"{y}\" width=\"{BAR_WIDTH}\" height=\"{bar_height}\" fill=\"{bar_color}\"><title>{word}: {count}</title></rect>"
        ));
        parts.push(format!(
            "<text x=\"{center}\" y=\"{}\" font-size=\"11\" text-anchor=\"middle\">{count}</text>",
            y.saturating_sub(4)
        ));
        parts.push(format!(
            "<text x=\"{center}\" y=\"{label_y}\" font-size=\"11\" text-anchor=\"end\" transform=\"rotate(-45 {center} {label_y})\">{word}</text>"
        ));
    }

    parts.push(format!(
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{MARGIN_TOP}\" x2=\"{MARGIN_LEFT}\" y2=\"{axis_y}\" stroke=\"#000\"/>"
    ));
    parts.push(format!(
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{axis_y}\" x2=\"{axis_right}\" y2=\"{axis_y}\" stroke=\"#000\"/>"
    ));
    parts.push(format!(
        "<text x=\"{title_x}\" y=\"{}\" font-size=\"13\" text-anchor=\"middle\">Words</text>",
        height - 12
    ));
    parts.push(format!(
        "<text x=\"24\" y=\"{y_label_y}\" font-size=\"13\" text-anchor=\"middle\" transform=\"rotate(-90 24 {y_label_y})\">Frequency</text>"
    ));
    parts.push(String::from("</svg>"));

    parts.join("")
}

/// Writes the chart for `table` to `path`.
///
/// # Errors
///
/// This function may return an error if:
/// * The parent directory cannot be created
/// * The file cannot be written
pub fn render_chart(table: &WordFrequencyTable, path: &Path, options: &ChartOptions) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(path, chart_svg(table, options))
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;

    tracing::info!(path = %path.display(), top_n = options.top_n, "saved chart");
    Ok(())
}

fn bar_height(count: usize, max_count: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    count.saturating_mul(PLOT_HEIGHT) / max_count
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
