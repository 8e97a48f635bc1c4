// src/core/source/pdf.rs
use crate::error::SourceError;
use std::any::Any;
use std::fs;
use std::panic;
use std::path::Path;

/// Extracts the text of every page, in page order.
///
/// `pdf_extract` panics on some structurally valid but incomplete documents
/// (fonts without a subtype, pages without resources). Those panics are
/// turned into `SourceError::Pdf` like any other parse failure.
pub fn read_pdf(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let message = match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
        Ok(Ok(text)) => return Ok(text),
        Ok(Err(err)) => err.to_string(),
        Err(payload) => format!("PDF parser panicked: {}", panic_message(payload.as_ref())),
    };

    Err(SourceError::Pdf {
        path: path.to_path_buf(),
        message,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause")
}
