//! Client-side Wire Types
//!
//! Mirrors of the node's response bodies, kept local to the frontend the
//! same way the node keeps its own DTOs.

use serde::{Deserialize, Deserializer};

/// Body of the upload endpoint's response. The node also reports a
/// `document_id` on success; the page only shows the message.
#[derive(Debug, Deserialize)]
pub struct UploadOutcome {
    pub message: String,
}

/// One search hit as the node reports it: the positional array
/// `[id, title, snippet, distance]`, where `distance` is a dissimilarity
/// in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub distance: f64,
}

impl<'de> Deserialize<'de> for SearchHit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (id, title, snippet, distance) =
            <(String, String, String, f64)>::deserialize(deserializer)?;
        Ok(SearchHit {
            id,
            title,
            snippet,
            distance,
        })
    }
}

/// Body of the search endpoint's response. Success carries `results`;
/// error statuses carry `message` instead.
#[derive(Debug, Deserialize)]
pub struct SearchOutcome {
    #[serde(default)]
    pub results: Option<Vec<SearchHit>>,
    #[serde(default)]
    pub message: Option<String>,
}
