//! Frontend gateway for the document search node.
//!
//! Serves the page with the two forms and drives their handlers: each form
//! submission is staged into the matching input stand-in, dispatched through
//! its binding, and answered with the freshly rendered status region markup.

mod bind;
mod highlight;
mod page;
mod render;
mod search;
mod types;
mod upload;

use crate::bind::{SearchBinding, UploadBinding, bind_search, bind_upload};
use crate::page::{FileInput, QueryInput, StagedFile, StatusRegion};
use crate::search::SearchHandler;
use crate::upload::UploadHandler;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
struct AppState {
    upload: Arc<UploadBinding>,
    search: Arc<SearchBinding>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let node_url = std::env::var("NODE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let node_url = node_url.trim_end_matches('/').to_string();
    let client = reqwest::Client::new();

    let upload = bind_upload(UploadHandler::new(
        client.clone(),
        format!("{}/upload/", node_url),
        FileInput::new(),
        StatusRegion::new(),
    ));
    let search = bind_search(SearchHandler::new(
        client,
        format!("{}/search/", node_url),
        QueryInput::new(),
        StatusRegion::new(),
    ));

    let state = AppState {
        upload: Arc::new(upload),
        search: Arc::new(search),
    };

    let app = Router::new()
        .route("/", get(ui_page))
        .route("/upload/", post(submit_upload))
        .route("/search/", post(submit_search))
        .with_state(state);

    tracing::info!("UI listening on {}, node at {}", bind_addr, node_url);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui_page() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn submit_upload(State(state): State<AppState>, mut multipart: Multipart) -> Html<String> {
    let input = state.upload.handler().input();
    match read_file_field(&mut multipart).await {
        Some(file) => input.select(file),
        None => input.clear(),
    }

    if let Some(task) = state.upload.trigger() {
        let _ = task.await;
    }

    Html(state.upload.handler().status().html())
}

#[derive(Deserialize)]
struct SearchFormBody {
    #[serde(default)]
    query: String,
}

async fn submit_search(
    State(state): State<AppState>,
    Form(body): Form<SearchFormBody>,
) -> Html<String> {
    state.search.handler().input().set(&body.query);

    if let Some(task) = state.search.trigger() {
        let _ = task.await;
    }

    Html(state.search.handler().results().html())
}

/// Pull the staged file out of the browser's multipart submission.
///
/// An empty filename or empty payload counts as no selection, which the
/// handler turns into its validation message.
async fn read_file_field(multipart: &mut Multipart) -> Option<StagedFile> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|n| n.to_string())
            .filter(|n| !n.is_empty())?;
        let bytes = field.bytes().await.ok()?.to_vec();
        if bytes.is_empty() {
            return None;
        }

        return Some(StagedFile { filename, bytes });
    }

    None
}
