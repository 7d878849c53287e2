use super::chunker;
use super::extract::extract_text;
use super::types::{IngestConfig, IngestError, UploadResponse};
use crate::index::store::DocumentStore;
use axum::Json;
use axum::extract::{Extension, Multipart};
use axum::http::StatusCode;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of a successful ingestion.
#[derive(Debug)]
pub struct ProcessedUpload {
    pub document_id: String,
    pub chunk_count: usize,
}

/// `POST /upload/` with a multipart body carrying the file under `file`.
pub async fn handle_upload(
    Extension(store): Extension<Arc<DocumentStore>>,
    Extension(config): Extension<Arc<IngestConfig>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<UploadResponse>) {
    let (filename, bytes) = match read_file_field(&mut multipart).await {
        Ok(staged) => staged,
        Err(err) => return error_response(err),
    };

    match process_upload(&store, &config, &filename, &bytes).await {
        Ok(processed) => {
            tracing::info!(
                "Indexed '{}' as {} ({} chunks, vocabulary {})",
                filename,
                processed.document_id,
                processed.chunk_count,
                store.vocabulary_size()
            );
            (
                StatusCode::OK,
                Json(UploadResponse {
                    message: format!("File '{}' uploaded and processed successfully", filename),
                    document_id: Some(processed.document_id),
                }),
            )
        }
        Err(err) => error_response(err),
    }
}

/// Persist, extract, chunk, and index one upload.
pub async fn process_upload(
    store: &DocumentStore,
    config: &IngestConfig,
    filename: &str,
    bytes: &[u8],
) -> Result<ProcessedUpload, IngestError> {
    persist_upload(config, filename, bytes).await?;

    let text = extract_text(filename, bytes)?;
    let chunks = chunker::chunk_document(&text);
    let chunk_count = chunks.len();

    let document_id = Uuid::new_v4().to_string();
    store.add_document(&document_id, filename, chunks);

    Ok(ProcessedUpload {
        document_id,
        chunk_count,
    })
}

async fn persist_upload(
    config: &IngestConfig,
    filename: &str,
    bytes: &[u8],
) -> Result<(), IngestError> {
    tokio::fs::create_dir_all(&config.uploads_dir).await?;

    // Only the final path component of a client-supplied name may land in the
    // uploads directory.
    let safe_name = Path::new(filename)
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "upload.bin".into());

    tokio::fs::write(config.uploads_dir.join(safe_name), bytes).await?;
    Ok(())
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), IngestError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| IngestError::Multipart(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|n| n.to_string())
            .filter(|n| !n.is_empty())
            .ok_or(IngestError::MissingFile)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| IngestError::Multipart(e.to_string()))?
            .to_vec();

        if bytes.is_empty() {
            return Err(IngestError::EmptyFile);
        }

        return Ok((filename, bytes));
    }

    Err(IngestError::MissingFile)
}

fn error_response(err: IngestError) -> (StatusCode, Json<UploadResponse>) {
    tracing::error!("Upload failed: {}", err);
    (
        error_status(&err),
        Json(UploadResponse {
            message: format!("Error uploading file: {}", err),
            document_id: None,
        }),
    )
}

fn error_status(err: &IngestError) -> StatusCode {
    match err {
        IngestError::MissingFile | IngestError::EmptyFile | IngestError::Multipart(_) => {
            StatusCode::BAD_REQUEST
        }
        IngestError::InvalidUtf8(_) | IngestError::PdfExtraction(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        IngestError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
