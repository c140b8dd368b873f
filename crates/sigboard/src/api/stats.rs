use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use sigboard_sessions::{summarize, Statistics};

use super::AppState;

pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<Statistics>, (StatusCode, String)> {
    let sessions = state
        .loader
        .load_all()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(Json(summarize(&sessions)))
}
