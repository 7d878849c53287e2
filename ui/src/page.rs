//! Page Element Stand-ins
//!
//! The form handlers touch three things on the page: the file input, the
//! query input, and a status/results region. Each is modeled here as a small
//! shared-state handle, so handlers can be constructed with explicit
//! references and exercised without a live page.

use std::sync::{Arc, RwLock};

/// A file staged for upload: the file input's current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// The upload form's file input element.
#[derive(Clone, Default)]
pub struct FileInput {
    selected: Arc<RwLock<Option<StagedFile>>>,
}

impl FileInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, file: StagedFile) {
        *self.selected.write().unwrap() = Some(file);
    }

    pub fn selected(&self) -> Option<StagedFile> {
        self.selected.read().unwrap().clone()
    }

    /// Reset to an empty selection.
    pub fn clear(&self) {
        *self.selected.write().unwrap() = None;
    }

    pub fn is_empty(&self) -> bool {
        self.selected.read().unwrap().is_none()
    }
}

/// The search form's query text input.
#[derive(Clone, Default)]
pub struct QueryInput {
    value: Arc<RwLock<String>>,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, value: &str) {
        *self.value.write().unwrap() = value.to_string();
    }

    pub fn value(&self) -> String {
        self.value.read().unwrap().clone()
    }
}

/// A region of the page that a handler renders markup into.
///
/// Writes replace the whole region. Overlapping submissions are not
/// sequenced, so the response that resolves last owns the region.
#[derive(Clone, Default)]
pub struct StatusRegion {
    markup: Arc<RwLock<String>>,
}

impl StatusRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, markup: impl Into<String>) {
        *self.markup.write().unwrap() = markup.into();
    }

    pub fn html(&self) -> String {
        self.markup.read().unwrap().clone()
    }
}
