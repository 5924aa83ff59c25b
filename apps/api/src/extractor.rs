//! PDF text extraction.
//!
//! Wraps `pdf-extract` to flatten a whole document into one string. The
//! matcher downstream only needs token adjacency, so page geometry is
//! deliberately discarded.

use crate::errors::AppError;

/// Flattens all extractable text in a PDF into a single string.
///
/// Pages are visited in document order; a page whose extracted text is empty
/// or whitespace-only contributes nothing. The remaining page texts are
/// trimmed and joined with a single ASCII space, so a document with no
/// extractable text at all yields `""` (Ok, not an error).
///
/// Bytes that fail PDF parsing surface as [`AppError::InvalidDocument`] —
/// callers can distinguish "empty PDF" from "not a PDF".
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        .map_err(|e| AppError::InvalidDocument(e.to_string()))?;

    Ok(pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}
