// src/core/source.rs
mod pdf;
mod text;

use crate::error::SourceError;
use std::path::Path;

/// Document formats the tool can read, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `.txt` and `.md`, read as UTF-8.
    PlainText,
    /// `.pdf`, text concatenated page by page.
    Pdf,
}

impl SourceKind {
    /// Picks a reader for `path` from its extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::UnsupportedExtension` when the extension is not
    /// one of `.txt`, `.md` or `.pdf`. The file itself is never touched.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "txt" | "md" => Ok(Self::PlainText),
            "pdf" => Ok(Self::Pdf),
            _ => Err(SourceError::UnsupportedExtension(dotted(&extension))),
        }
    }

    /// Reads the full text of `path`.
    ///
    /// # Errors
    ///
    /// * `SourceError::Read` if the file is missing, unreadable or not UTF-8
    /// * `SourceError::Pdf` if the PDF cannot be parsed
    pub fn read(self, path: &Path) -> Result<String, SourceError> {
        match self {
            Self::PlainText => text::read_text(path),
            Self::Pdf => pdf::read_pdf(path),
        }
    }

    /// Reads `path`, logging a warning and returning an empty string on failure.
    #[must_use]
    pub fn extract_text(self, path: &Path) -> String {
        self.read(path).unwrap_or_else(|err| {
            tracing::warn!("{err}");
            String::new()
        })
    }
}

/// Resolves the reader for `path` and extracts its text.
///
/// Read failures degrade to an empty string so the caller still gets an
/// all-zero report.
///
/// # Errors
///
/// Returns `SourceError::UnsupportedExtension` for extensions outside the
/// allow-list.
pub fn extract_text(path: &Path) -> Result<String, SourceError> {
    let kind = SourceKind::from_path(path)?;
    tracing::debug!(?kind, path = %path.display(), "reading document");
    Ok(kind.extract_text(path))
}

/// `.ext` for a real extension, nothing for a bare file name.
fn dotted(extension: &str) -> String {
    if extension.is_empty() {
        return String::new();
    }
    format!(".{extension}")
}
