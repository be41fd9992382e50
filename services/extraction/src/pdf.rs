//! PDF text extraction boundary.
//!
//! The only fallible step of the per-document pipeline: a document whose
//! text cannot be obtained at all is reported as an error here, and the
//! batch orchestrator decides whether to skip it or abort.

use anyhow::{Context, Result};
use std::path::Path;

/// Extract the full concatenated text of a PDF from raw bytes.
pub fn extract_text(data: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(data).context("Failed to extract text from PDF")
}

/// Extract the full text of a PDF file on disk.
pub fn extract_text_from_file(path: &Path) -> Result<String> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    extract_text(&data)
}
