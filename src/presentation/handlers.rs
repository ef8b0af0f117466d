// HTTP request handlers
use crate::presentation::app_state::AppState;
use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the tabbed viewer page. Rebuilt from configuration on every
/// request, so responses are byte-identical across requests.
pub async fn show_viewer(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.viewer_service.render())
}

#[derive(Debug, Serialize)]
pub struct PanelStatus {
    pub title: String,
    pub source: String,
    pub width: u32,
    pub height: u32,
    pub available: bool,
}

/// List configured panels with their current document availability
pub async fn list_panels(State(state): State<Arc<AppState>>) -> Json<Vec<PanelStatus>> {
    let group = state.viewer_service.tab_group();
    let mut statuses = Vec::with_capacity(group.panels.len());
    for panel in group.panels {
        let available = state.catalog.probe(&panel.source).await;
        statuses.push(PanelStatus {
            title: panel.title,
            source: panel.source,
            width: panel.width,
            height: panel.height,
            available,
        });
    }
    Json(statuses)
}

/// List report documents present under the reports directory
pub async fn list_documents(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    match state.catalog.list_documents().await {
        Ok(documents) => Json(documents),
        Err(e) => {
            eprintln!("Error listing report documents: {}", e);
            // Return empty list on error
            Json(Vec::new())
        }
    }
}
