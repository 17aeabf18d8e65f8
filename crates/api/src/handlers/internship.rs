use axum::extract::State;
use axum::Json;
use folio_core::types::Record;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /internships
///
/// Ordering (most recent `start_date` first) comes from the store.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Record>>> {
    Ok(Json(state.store.internships().await?))
}
