/// Words per chunk.
pub const CHUNK_SIZE: usize = 500;
/// Words shared between consecutive chunks.
pub const CHUNK_OVERLAP: usize = 50;

/// Split text into overlapping word-window chunks with the default sizes.
pub fn chunk_document(text: &str) -> Vec<String> {
    chunk_text(text, CHUNK_SIZE, CHUNK_OVERLAP)
}

/// Split text into word windows of `chunk_size`, advancing by
/// `chunk_size - overlap` words per window.
///
/// The final window may be shorter. Empty or whitespace-only input yields no
/// chunks.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut chunks = Vec::new();

    if words.is_empty() {
        return chunks;
    }

    let step = chunk_size.saturating_sub(overlap).max(1);
    let mut start = 0;
    while start < words.len() {
        let end = (start + chunk_size).min(words.len());
        chunks.push(words[start..end].join(" "));

        if end == words.len() {
            break;
        }
        start += step;
    }

    chunks
}
