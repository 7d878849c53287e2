//! Search Data Types
//!
//! Defines the Data Transfer Objects (DTOs) the search API exchanges with
//! clients. The hit type keeps named fields in code but travels as a
//! positional JSON array, which is the wire shape the frontend consumes.

use serde::de::Deserializer;
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// One ranked search hit.
///
/// Serialized as the 4-element array `[id, title, snippet, distance]`:
/// the upload's document id, its filename, the matching chunk text, and a
/// dissimilarity score in `[0, 1]` (`1 - cosine similarity`).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub distance: f64,
}

impl Serialize for SearchHit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(4)?;
        tup.serialize_element(&self.id)?;
        tup.serialize_element(&self.title)?;
        tup.serialize_element(&self.snippet)?;
        tup.serialize_element(&self.distance)?;
        tup.end()
    }
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

/// Response body of the search endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}
