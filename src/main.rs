use axum::{
    Router,
    extract::{DefaultBodyLimit, Extension},
    routing::post,
};
use docsearch::index::store::DocumentStore;
use docsearch::ingestion::handlers::handle_upload;
use docsearch::ingestion::types::IngestConfig;
use docsearch::search::handlers::handle_search;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:8000".parse()?;
    let mut uploads_dir = PathBuf::from("uploads");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--uploads" => {
                uploads_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--uploads <dir>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8000 --uploads uploads", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Starting document search node on {}", bind_addr);
    tracing::info!("Uploads directory: {}", uploads_dir.display());

    // 1. Shared state:
    let store = Arc::new(DocumentStore::new());
    let config = Arc::new(IngestConfig { uploads_dir });

    // 2. HTTP Router:
    let app = Router::new()
        .route("/upload/", post(handle_upload))
        .route("/search/", post(handle_search))
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024))
        .layer(Extension(store))
        .layer(Extension(config));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
