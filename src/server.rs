//! HTTP server.
//!
//! Serves static assets under `/static` and renders a page for every other
//! path. The Leptos route tree decides what each path shows.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::Uri,
    response::{Html, IntoResponse, Response},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::ServerError;
use crate::ui::{UiSettings, render_document};

/// State shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Settings handed to every render.
    pub ui: Arc<UiSettings>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            ui: Arc::new(config.ui.settings()),
        }
    }
}

/// Builds the application router.
pub fn build_router(config: Arc<AppConfig>) -> Router {
    let static_dir = ServeDir::new(&config.ui.static_dir);
    let state = AppState::new(&config);

    Router::new()
        .nest_service("/static", static_dir)
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<(), ServerError> {
    let addr = config.server.bind_addr();
    let app = build_router(Arc::clone(&config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        static_dir = %config.ui.static_dir,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Renders the page for the requested path.
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());

    let page = render_document(&state.ui, path);

    debug!(
        name: "page.rendered",
        path = %uri.path(),
        status = %page.status,
        bytes = page.html.len(),
        "Page rendered"
    );

    (page.status, Html(page.html)).into_response()
}
