use crate::index::store::DocumentStore;
use crate::search::tokenizer::tokenize;
use crate::search::types::SearchHit;
use std::collections::{HashMap, HashSet};

/// How many hits a search reports at most.
pub const DEFAULT_TOP_K: usize = 5;

/// Term frequency of each token: count divided by total token count.
pub fn term_frequency(tokens: &[String]) -> HashMap<String, f64> {
    let total = tokens.len();
    if total == 0 {
        return HashMap::new();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / total as f64))
        .collect()
}

/// Weight a term-frequency map by inverse document frequency.
///
/// `idf = ln(total_chunks / (1 + doc_freq))`. Terms the store has never seen
/// carry no weight and are dropped from the vector.
pub fn tfidf_vector(tf: &HashMap<String, f64>, store: &DocumentStore) -> HashMap<String, f64> {
    let total_chunks = store.chunk_count();
    let mut vector = HashMap::new();

    for (term, tf_value) in tf {
        let doc_freq = store.doc_freq(term);
        if doc_freq > 0 {
            let idf = (total_chunks as f64 / (1 + doc_freq) as f64).ln();
            vector.insert(term.clone(), tf_value * idf);
        }
    }

    vector
}

/// Cosine similarity between two sparse vectors. Zero if either norm is zero.
pub fn cosine_similarity(vec1: &HashMap<String, f64>, vec2: &HashMap<String, f64>) -> f64 {
    let mut dot_product = 0.0;
    let mut norm1_squared = 0.0;
    let mut norm2_squared = 0.0;

    let all_keys: HashSet<&String> = vec1.keys().chain(vec2.keys()).collect();
    for key in all_keys {
        let val1 = vec1.get(key).copied().unwrap_or(0.0);
        let val2 = vec2.get(key).copied().unwrap_or(0.0);
        dot_product += val1 * val2;
        norm1_squared += val1 * val1;
        norm2_squared += val2 * val2;
    }

    let norm1 = norm1_squared.sqrt();
    let norm2 = norm2_squared.sqrt();

    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    dot_product / (norm1 * norm2)
}

/// Rank every stored chunk against `query` and report the top `k` hits.
///
/// Chunks with zero similarity are dropped. Hits carry
/// `distance = 1 - cosine similarity`, so the best hit comes first with the
/// lowest distance.
pub fn search(query: &str, store: &DocumentStore, k: usize) -> Vec<SearchHit> {
    if store.is_empty() {
        return Vec::new();
    }

    let query_tf = term_frequency(&tokenize(query));
    let query_vector = tfidf_vector(&query_tf, store);

    let mut scored = Vec::new();
    for entry in store.snapshot() {
        let chunk_tf = term_frequency(&tokenize(&entry.text));
        let chunk_vector = tfidf_vector(&chunk_tf, store);

        let similarity = cosine_similarity(&query_vector, &chunk_vector);
        if similarity > 0.0 {
            scored.push((entry, similarity));
        }
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);

    scored
        .into_iter()
        .map(|(entry, similarity)| SearchHit {
            id: entry.document_id,
            title: entry.filename,
            snippet: entry.text,
            distance: 1.0 - similarity,
        })
        .collect()
}
