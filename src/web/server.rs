use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

use crate::analyst::InvoiceAnalyst;
use crate::web::handlers;

/// Request body ceiling. Matches Gemini's 20MB limit for inline-media
/// requests, which the base64 upload dominates.
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Application state shared across routes.
#[derive(Clone)]
pub struct AppState {
    pub analyst: Arc<InvoiceAnalyst>,
}

impl AppState {
    #[must_use]
    pub fn new(analyst: InvoiceAnalyst) -> Self {
        Self {
            analyst: Arc::new(analyst),
        }
    }
}

/// Builds the full application router: the page itself, a health probe,
/// and the single submit endpoint. Bodies past [`MAX_BODY_BYTES`] are
/// refused before any decoding work.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/ask", post(handlers::ask))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Binds the address and serves the application until the process exits.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let app = router(state);

    log::info!("Listening on: {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
