//! Route definitions for the `/employees` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// ```text
/// GET  /employees  -> list
/// POST /employees  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/employees", get(employee::list).post(employee::create))
}
