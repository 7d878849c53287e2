//! Ingestion Service Module
//!
//! Handles the intake, preprocessing, and indexing of uploaded documents.
//!
//! ## Workflow
//! 1. **Upload**: Receives a file over multipart HTTP (`POST /upload/`).
//! 2. **Persist**: Saves the raw payload into the uploads directory.
//! 3. **Extract**: Pulls plain text out of the payload (PDF or UTF-8 text).
//! 4. **Chunk**: Splits the text into overlapping word windows.
//! 5. **Index**: Registers the chunks with the shared `DocumentStore`.

pub mod chunker;
pub mod extract;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
