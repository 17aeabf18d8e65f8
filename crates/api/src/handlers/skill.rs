use axum::extract::State;
use axum::Json;
use folio_core::types::Record;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Record>>> {
    Ok(Json(state.store.skills().await?))
}
