// src/models.rs
mod frequency_table;
mod text_stats;

pub use frequency_table::WordFrequencyTable;
pub use text_stats::TextStats;
