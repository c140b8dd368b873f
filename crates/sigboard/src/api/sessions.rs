use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use sigboard_sessions::{view, FilterState, SessionRecord, Status};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub country: Option<String>,
    pub limit: Option<usize>,
}

/// One row of the session table as served to dashboard clients.
#[derive(Debug, Serialize)]
pub struct SessionRow {
    pub session_id: Option<String>,
    pub country: String,
    pub tier: Option<String>,
    pub generated_at: Option<String>,
    pub status: Status,
}

impl From<&SessionRecord> for SessionRow {
    fn from(record: &SessionRecord) -> Self {
        SessionRow {
            session_id: record.session_id.clone(),
            country: record.country_code().to_string(),
            tier: record.tier.clone(),
            generated_at: record.generated_at.clone(),
            status: record.status(),
        }
    }
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<SessionRow>>, (StatusCode, String)> {
    let sessions = state
        .loader
        .load_all()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    let filter = match params.country {
        Some(code) => FilterState::with_country(code),
        None => FilterState::default(),
    };
    let limit = params.limit.unwrap_or(state.limit);

    let rows: Vec<SessionRow> = view::recent_sessions(&sessions, &filter, limit)
        .into_iter()
        .map(SessionRow::from)
        .collect();

    Ok(Json(rows))
}
