// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::application::viewer_service::ViewerService;
use crate::infrastructure::config::load_viewer_config;
use crate::infrastructure::fs_catalog::FsReportCatalog;
use crate::infrastructure::html_renderer::HtmlRenderer;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, list_documents, list_panels, show_viewer};

// Panel sources are relative paths, so documents are served from the same
// directory they are probed in
const REPORTS_DIR: &str = "reports";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration (built-in single panel when no file is present)
    let viewer_config = load_viewer_config()?;
    let bind = viewer_config.server.bind.clone();

    // Create catalog (infrastructure layer)
    let catalog = Arc::new(FsReportCatalog::new(std::env::current_dir()?, REPORTS_DIR));

    // Create services (application layer)
    let viewer_service = ViewerService::new(viewer_config, Arc::new(HtmlRenderer::new()));

    // Create application state
    let state = Arc::new(AppState {
        viewer_service,
        catalog,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(show_viewer))
        .route("/panels", get(list_panels))
        .route("/documents", get(list_documents))
        .nest_service("/reports", ServeDir::new(REPORTS_DIR))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = bind.parse()?;
    println!("Starting report-viewer service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
