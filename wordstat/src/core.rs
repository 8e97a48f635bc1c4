// src/core.rs
pub mod analyzer;
pub mod chart;
pub mod report;
pub mod source;
