//! Ingestion Data Types
//!
//! Defines the upload endpoint's response body, the pipeline's runtime
//! configuration, and the error taxonomy for failed ingestions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Runtime configuration for the upload pipeline, shared via an `Extension`.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub uploads_dir: PathBuf,
}

/// Response returned to the client after an upload request is processed.
///
/// `document_id` is present only on success; error responses carry just the
/// message, mirrored into the page's status region by the frontend.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

/// Everything that can go wrong between receiving an upload and indexing it.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("no file was attached to the request")]
    MissingFile,
    #[error("the uploaded file is empty")]
    EmptyFile,
    #[error("malformed multipart request: {0}")]
    Multipart(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is not valid UTF-8 text: {0}")]
    InvalidUtf8(String),
    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),
}
