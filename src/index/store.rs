use crate::search::tokenizer::tokenize;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::RwLock;

/// One indexed chunk of an uploaded document.
///
/// The position of an entry in the store is append order; search results
/// preserve no other identity than the `document_id` of the upload that
/// produced the chunk.
#[derive(Debug, Clone)]
pub struct ChunkEntry {
    pub document_id: String,
    pub filename: String,
    pub text: String,
}

/// Shared in-memory index of every uploaded document.
///
/// Keeps the full chunk list (append-only, ordered) and a document-frequency
/// table counting how many chunks contain each term at least once. Both are
/// safe to touch from concurrent upload and search handlers.
pub struct DocumentStore {
    chunks: RwLock<Vec<ChunkEntry>>,
    doc_freq: DashMap<String, usize>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            chunks: RwLock::new(Vec::new()),
            doc_freq: DashMap::new(),
        }
    }

    /// Add every chunk of one uploaded document to the index.
    ///
    /// Each chunk contributes one entry to the chunk list and bumps the
    /// document frequency of each of its unique terms.
    pub fn add_document(&self, document_id: &str, filename: &str, chunks: Vec<String>) {
        for chunk in chunks {
            let unique_terms: HashSet<String> = tokenize(&chunk).into_iter().collect();

            self.chunks.write().unwrap().push(ChunkEntry {
                document_id: document_id.to_string(),
                filename: filename.to_string(),
                text: chunk,
            });

            for term in unique_terms {
                self.doc_freq
                    .entry(term)
                    .and_modify(|count| *count += 1)
                    .or_insert(1);
            }
        }
    }

    /// Number of chunks containing `term` at least once.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freq.get(term).map(|entry| *entry).unwrap_or(0)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.read().unwrap().is_empty()
    }

    /// Number of distinct terms seen across all chunks.
    pub fn vocabulary_size(&self) -> usize {
        self.doc_freq.len()
    }

    /// Clone of the current chunk list, in append order.
    ///
    /// Scoring walks every chunk anyway, so handing out a snapshot keeps the
    /// write lock out of the whole ranking pass.
    pub fn snapshot(&self) -> Vec<ChunkEntry> {
        self.chunks.read().unwrap().clone()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
