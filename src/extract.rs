//! Document text provider: turns an input file into per-page plain text.
//!
//! PDFs are extracted page by page with `pdf-extract`; plain-text and
//! Markdown files are treated as a single page 1. Pages whose extracted text
//! is empty are omitted, so callers only ever see pages with content. A file
//! that cannot be parsed at all is an extraction failure; the caller skips
//! that document and the batch continues.

use std::path::Path;

/// One page of extracted text. Numbers are 1-based and keep their original
/// position even when earlier pages were omitted as empty.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: u32,
    pub text: String,
}

/// Extraction error for a single document (never fatal to the batch).
#[derive(Debug)]
pub enum ExtractError {
    UnsupportedFormat(String),
    Io(String),
    Pdf(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::UnsupportedFormat(ext) => write!(f, "unsupported format: {}", ext),
            ExtractError::Io(e) => write!(f, "read failed: {}", e),
            ExtractError::Pdf(e) => write!(f, "PDF extraction failed: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Extract the ordered page texts of one document.
pub fn extract_pages(path: &Path) -> Result<Vec<Page>, ExtractError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => extract_pdf(path),
        "txt" | "md" => extract_plain(path),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

fn extract_pdf(path: &Path) -> Result<Vec<Page>, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::Io(e.to_string()))?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    Ok(pages
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(i, text)| Page {
            number: i as u32 + 1,
            text,
        })
        .collect())
}

fn extract_plain(path: &Path) -> Result<Vec<Page>, ExtractError> {
    let text = std::fs::read_to_string(path).map_err(|e| ExtractError::Io(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![Page { number: 1, text }])
}
