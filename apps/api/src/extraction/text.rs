//! Text extraction boundary: uploaded bytes + filename → decoded text.
//!
//! PDF and plain text are the two recognized forms; anything else degrades to
//! a lossy UTF-8 decode. Extraction failure degrades to an empty string — the
//! handler decides whether empty text is an error.

use tracing::warn;

pub fn extract_text(bytes: &[u8], filename: &str) -> String {
    if filename.to_lowercase().ends_with(".pdf") {
        extract_pdf_text(bytes)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

fn extract_pdf_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF text extraction failed: {e}");
            String::new()
        }
    }
}
