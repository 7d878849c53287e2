use super::types::IngestError;
use std::path::Path;

/// Extract searchable plain text from an uploaded file.
///
/// PDFs go through `pdf_extract`; any other extension is assumed to hold
/// UTF-8 text and is decoded strictly, so binary formats surface a decode
/// error instead of garbage entering the index.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, IngestError> {
    if has_extension(filename, "pdf") {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| IngestError::PdfExtraction(e.to_string()))
    } else {
        String::from_utf8(bytes.to_vec()).map_err(|e| IngestError::InvalidUtf8(e.to_string()))
    }
}

fn has_extension(filename: &str, ext: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}
