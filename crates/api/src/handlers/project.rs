//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::Json;
use folio_core::portfolio::{group_project_rows, Project};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /projects
///
/// Fetches the flat project/image join and groups it into one object per
/// project before responding.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let rows = state.store.project_rows().await?;
    let row_count = rows.len();
    let projects = group_project_rows(rows);
    tracing::debug!(rows = row_count, projects = projects.len(), "Grouped project rows");
    Ok(Json(projects))
}
