//! Form Bindings
//!
//! Explicit wiring between a form and its handler, replacing global listener
//! attachment. A binding dispatches each submission as an independent
//! fire-and-forget task and can be detached; detaching (or dropping the
//! binding) stops future dispatch but never cancels a task already in
//! flight, so a late response may still overwrite the status region.

use crate::search::SearchHandler;
use crate::upload::UploadHandler;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;

/// Disposable submit wiring for the upload form.
pub struct UploadBinding {
    handler: UploadHandler,
    detached: Arc<AtomicBool>,
}

impl UploadBinding {
    pub fn handler(&self) -> &UploadHandler {
        &self.handler
    }

    /// Dispatch one submission. Returns `None` once detached.
    pub fn trigger(&self) -> Option<JoinHandle<()>> {
        if self.detached.load(Ordering::SeqCst) {
            return None;
        }
        let handler = self.handler.clone();
        Some(tokio::spawn(async move { handler.submit().await }))
    }

    pub fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
    }
}

impl Drop for UploadBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Disposable submit wiring for the search form.
pub struct SearchBinding {
    handler: SearchHandler,
    detached: Arc<AtomicBool>,
}

impl SearchBinding {
    pub fn handler(&self) -> &SearchHandler {
        &self.handler
    }

    /// Dispatch one submission. Returns `None` once detached.
    pub fn trigger(&self) -> Option<JoinHandle<()>> {
        if self.detached.load(Ordering::SeqCst) {
            return None;
        }
        let handler = self.handler.clone();
        Some(tokio::spawn(async move { handler.submit().await }))
    }

    pub fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
    }
}

impl Drop for SearchBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

pub fn bind_upload(handler: UploadHandler) -> UploadBinding {
    UploadBinding {
        handler,
        detached: Arc::new(AtomicBool::new(false)),
    }
}

pub fn bind_search(handler: SearchHandler) -> SearchBinding {
    SearchBinding {
        handler,
        detached: Arc::new(AtomicBool::new(false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{FileInput, QueryInput, StatusRegion};

    fn upload_binding() -> UploadBinding {
        bind_upload(UploadHandler::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1/upload/",
            FileInput::new(),
            StatusRegion::new(),
        ))
    }

    #[tokio::test]
    async fn test_trigger_runs_submission_to_completion() {
        let binding = upload_binding();

        // Empty selection: the dispatched task takes the validation path
        let task = binding.trigger().expect("binding should be attached");
        task.await.unwrap();

        assert_eq!(
            binding.handler().status().html(),
            "<p class=\"error\">Please select a file to upload</p>"
        );
    }

    #[tokio::test]
    async fn test_detached_binding_stops_dispatching() {
        let binding = upload_binding();
        binding.detach();

        assert!(binding.trigger().is_none());
        assert!(binding.handler().status().html().is_empty());
    }

    #[tokio::test]
    async fn test_search_binding_dispatches() {
        let binding = bind_search(SearchHandler::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1/search/",
            QueryInput::new(),
            StatusRegion::new(),
        ));

        let task = binding.trigger().expect("binding should be attached");
        task.await.unwrap();

        assert_eq!(
            binding.handler().results().html(),
            "<p class=\"error\">Please enter a search query</p>"
        );
    }
}
