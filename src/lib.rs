//! Document Search Service Library
//!
//! This library crate defines the core modules of the document search node.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The node is composed of three loosely coupled subsystems:
//!
//! - **`ingestion`**: The data intake pipeline. Accepts file uploads over HTTP,
//!   persists the raw payload, extracts plain text (PDF or UTF-8), and splits it
//!   into overlapping word-window chunks ready for indexing.
//! - **`index`**: The in-memory state layer. Holds every indexed chunk together
//!   with per-term document frequencies, shared across request handlers.
//! - **`search`**: The information retrieval logic. Contains the tokenizer, the
//!   TF-IDF scoring engine, and the query endpoint that ranks chunks by cosine
//!   similarity and reports them as dissimilarity scores.

pub mod index;
pub mod ingestion;
pub mod search;
