// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while turning a document path into text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unsupported file type: {0}.")]
    UnsupportedExtension(String),

    #[error("Error reading the file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error extracting text from PDF {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },
}
