//! Turning input files into document text.
//!
//! Plain text is decoded as lossy UTF-8. `.pdf` files go through
//! `pdf-extract` when the `pdf` feature is enabled (it is by default).

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read `path` and return its text.
pub fn extract_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::extraction_io(path, e))?;
    debug!(file = %path.display(), bytes = bytes.len(), "read document");

    if is_pdf(path) {
        let text = extract_pdf(path, &bytes)?;
        if text.trim().is_empty() {
            warn!(file = %path.display(), "PDF has no text layer");
        }
        return Ok(text);
    }
    Ok(decode_text(&bytes))
}

fn decode_text(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    let text: &str = &decoded;
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text).to_string()
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(feature = "pdf")]
fn extract_pdf(path: &Path, bytes: &[u8]) -> Result<String> {
    // pdf-extract panics on some malformed files; keep that inside this document.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => {
            debug!(file = %path.display(), chars = text.chars().count(), "extracted PDF text");
            Ok(text)
        }
        Ok(Err(e)) => Err(Error::extraction(path, format!("PDF extraction failed: {e}"))),
        Err(_) => Err(Error::extraction(
            path,
            "PDF extraction failed: malformed document",
        )),
    }
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(path: &Path, _bytes: &[u8]) -> Result<String> {
    Err(Error::extraction(
        path,
        "PDF input needs the `pdf` feature; convert the script to plain text first",
    ))
}
