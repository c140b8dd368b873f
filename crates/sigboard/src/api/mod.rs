mod sessions;
mod stats;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use sigboard_sessions::SessionLoader;

#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<SessionLoader>,
    pub limit: usize,
}

pub fn create_router(loader: Arc<SessionLoader>, limit: usize) -> Router {
    let state = AppState { loader, limit };

    Router::new()
        .route("/api/stats", get(stats::get_stats))
        .route("/api/sessions", get(sessions::list_sessions))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
