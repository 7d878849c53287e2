//! Ingestion Module Tests
//!
//! Validates the upload pipeline below the HTTP layer.
//!
//! ## Test Scopes
//! - **Chunker**: Window and overlap arithmetic.
//! - **Extraction**: Dispatch by extension and decode failures.
//! - **Pipeline**: Persisting and indexing an upload end to end.

#[cfg(test)]
mod tests {
    use crate::index::store::DocumentStore;
    use crate::ingestion::chunker::{CHUNK_OVERLAP, CHUNK_SIZE, chunk_document, chunk_text};
    use crate::ingestion::extract::extract_text;
    use crate::ingestion::handlers::process_upload;
    use crate::ingestion::types::{IngestConfig, IngestError};

    // ============================================================
    // CHUNKER TESTS
    // ============================================================

    fn words(n: usize) -> String {
        (0..n)
            .map(|i| format!("w{}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_chunk_empty_text() {
        assert!(chunk_text("", CHUNK_SIZE, CHUNK_OVERLAP).is_empty());
        assert!(chunk_text("   \n\t ", CHUNK_SIZE, CHUNK_OVERLAP).is_empty());
    }

    #[test]
    fn test_chunk_shorter_than_window() {
        let chunks = chunk_document("just a few words");

        assert_eq!(chunks, vec!["just a few words"]);
    }

    #[test]
    fn test_chunk_window_advances_by_size_minus_overlap() {
        // 10 words, window 4, overlap 1 -> starts at 0, 3, 6; the window
        // touching the last word ends the walk
        let text = words(10);
        let chunks = chunk_text(&text, 4, 1);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], "w0 w1 w2 w3");
        assert_eq!(chunks[1], "w3 w4 w5 w6");
        assert_eq!(chunks[2], "w6 w7 w8 w9");
    }

    #[test]
    fn test_chunk_consecutive_windows_share_overlap() {
        let text = words(1000);
        let chunks = chunk_document(&text);

        // Windows at 0, 450, 900
        assert_eq!(chunks.len(), 3);

        let first: Vec<&str> = chunks[0].split_whitespace().collect();
        let second: Vec<&str> = chunks[1].split_whitespace().collect();
        assert_eq!(first.len(), CHUNK_SIZE);
        assert_eq!(&first[first.len() - CHUNK_OVERLAP..], &second[..CHUNK_OVERLAP]);
    }

    #[test]
    fn test_chunk_exact_window_yields_single_chunk() {
        let text = words(CHUNK_SIZE);
        let chunks = chunk_document(&text);

        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_chunk_degenerate_overlap_still_terminates() {
        // overlap >= size would stall the window; the step clamps to 1
        let chunks = chunk_text(&words(5), 2, 2);

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], "w0 w1");
        assert_eq!(chunks[3], "w3 w4");
    }

    // ============================================================
    // EXTRACTION TESTS
    // ============================================================

    #[test]
    fn test_extract_plain_text() {
        let text = extract_text("notes.txt", b"hello upload").expect("extraction failed");

        assert_eq!(text, "hello upload");
    }

    #[test]
    fn test_extract_unknown_extension_treated_as_text() {
        let text = extract_text("README", b"no extension at all").expect("extraction failed");

        assert_eq!(text, "no extension at all");
    }

    #[test]
    fn test_extract_rejects_invalid_utf8() {
        let err = extract_text("blob.txt", &[0xff, 0xfe, 0x00, 0x01]).unwrap_err();

        assert!(matches!(err, IngestError::InvalidUtf8(_)));
    }

    #[test]
    fn test_extract_pdf_dispatch_is_case_insensitive() {
        // Garbage bytes must be routed to the PDF extractor, not the UTF-8 path
        let err = extract_text("REPORT.PDF", &[0xff, 0x00, 0x01]).unwrap_err();

        assert!(matches!(err, IngestError::PdfExtraction(_)));
    }

    // ============================================================
    // PIPELINE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_process_upload_persists_and_indexes() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let config = IngestConfig {
            uploads_dir: dir.path().join("uploads"),
        };
        let store = DocumentStore::new();

        let processed = process_upload(&store, &config, "pets.txt", b"I have a cat and a dog")
            .await
            .expect("upload failed");

        assert_eq!(processed.chunk_count, 1);
        assert!(!processed.document_id.is_empty());
        assert_eq!(store.chunk_count(), 1);
        assert_eq!(store.doc_freq("cat"), 1);
        assert!(config.uploads_dir.join("pets.txt").exists());
    }

    #[tokio::test]
    async fn test_process_upload_strips_path_components() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let config = IngestConfig {
            uploads_dir: dir.path().join("uploads"),
        };
        let store = DocumentStore::new();

        process_upload(&store, &config, "../escape.txt", b"contained")
            .await
            .expect("upload failed");

        assert!(config.uploads_dir.join("escape.txt").exists());
        assert!(!dir.path().join("escape.txt").exists());
    }

    #[tokio::test]
    async fn test_process_upload_empty_text_indexes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let config = IngestConfig {
            uploads_dir: dir.path().to_path_buf(),
        };
        let store = DocumentStore::new();

        let processed = process_upload(&store, &config, "blank.txt", b"   \n  ")
            .await
            .expect("upload failed");

        assert_eq!(processed.chunk_count, 0);
        assert!(store.is_empty());
    }
}
