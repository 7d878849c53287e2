//! Index Module
//!
//! The in-memory state layer of the node.
//!
//! ## Overview
//! Holds every chunk produced by the ingestion pipeline together with the
//! per-term document frequencies the scoring engine needs for IDF weighting.
//! The store is shared across HTTP handlers behind an `Arc` and is safe for
//! concurrent uploads and searches.
//!
//! ## Submodules
//! - **`store`**: The `DocumentStore` itself plus the `ChunkEntry` record.

pub mod store;
