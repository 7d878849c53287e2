//! Upload Form Handler
//!
//! One-shot submission flow for the upload form: validate the staged
//! selection, POST it as multipart form data, and render the outcome into
//! the status region.

use crate::page::{FileInput, StagedFile, StatusRegion};
use crate::render;
use crate::types::UploadOutcome;

/// Handles submissions of the upload form.
///
/// Each `submit` call is independent: no retry, no cancellation, no
/// sequencing between overlapping submissions. The response that resolves
/// last owns the status region.
#[derive(Clone)]
pub struct UploadHandler {
    client: reqwest::Client,
    endpoint: String,
    input: FileInput,
    status: StatusRegion,
}

impl UploadHandler {
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        input: FileInput,
        status: StatusRegion,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            input,
            status,
        }
    }

    pub fn input(&self) -> &FileInput {
        &self.input
    }

    pub fn status(&self) -> &StatusRegion {
        &self.status
    }

    /// Run one submission to completion.
    ///
    /// With nothing selected, renders a validation error and never touches
    /// the network. On HTTP success the server message is rendered and the
    /// file input is cleared; on an HTTP error the message is rendered and
    /// the selection stays. Transport or body-parse failures render a
    /// generic failure line with the error text.
    pub async fn submit(&self) {
        let staged = match self.input.selected() {
            Some(file) => file,
            None => {
                self.status
                    .set(render::error("Please select a file to upload"));
                return;
            }
        };

        self.status.set(render::pending("Uploading..."));

        match self.post_file(staged).await {
            Ok((ok, outcome)) => {
                if ok {
                    self.status.set(render::success(&outcome.message));
                    self.input.clear();
                } else {
                    self.status.set(render::error(&outcome.message));
                }
            }
            Err(err) => {
                self.status
                    .set(render::error(&format!("Upload failed: {}", err)));
            }
        }
    }

    async fn post_file(&self, staged: StagedFile) -> Result<(bool, UploadOutcome), reqwest::Error> {
        let part = reqwest::multipart::Part::bytes(staged.bytes).file_name(staged.filename);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let ok = response.status().is_success();
        let outcome = response.json::<UploadOutcome>().await?;
        Ok((ok, outcome))
    }
}
