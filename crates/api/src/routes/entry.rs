//! Route definitions for the `/entries` resource.
//!
//! Registered as full paths rather than nested, because the trailing slash
//! is significant: `POST /entries` inserts one entry while `POST /entries/`
//! upserts a batch.

use axum::routing::get;
use axum::Router;

use crate::handlers::entry;
use crate::state::AppState;

/// ```text
/// GET  /entries   -> list
/// POST /entries   -> create
/// GET  /entries/  -> list
/// POST /entries/  -> upsert_batch
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/entries", get(entry::list).post(entry::create))
        .route("/entries/", get(entry::list).post(entry::upsert_batch))
}
