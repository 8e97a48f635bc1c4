// src/core/source/text.rs
use crate::error::SourceError;
use std::fs;
use std::path::Path;

pub fn read_text(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}
