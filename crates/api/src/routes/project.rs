//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET  /projects  -> list
/// POST /projects  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/projects", get(project::list).post(project::create))
}
