//! Read-only portfolio content routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{education, internship, project, skill};
use crate::state::AppState;

/// ```text
/// GET /projects     -> project::list
/// GET /skills       -> skill::list
/// GET /education    -> education::list
/// GET /internships  -> internship::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list))
        .route("/skills", get(skill::list))
        .route("/education", get(education::list))
        .route("/internships", get(internship::list))
}
