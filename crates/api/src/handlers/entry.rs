//! Handlers for the `/entries` resource.
//!
//! `POST /entries` is a plain insert; `POST /entries/` (trailing slash) is
//! the batch upsert used by the timesheet screen's save button.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use labourlog_core::error::CoreError;
use labourlog_db::models::entry::{CreateEntry, CreatedEntry, Entry, UpsertEntry};
use labourlog_db::repositories::EntryRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /entries
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Entry>>> {
    let entries = EntryRepo::list(&state.pool).await?;
    Ok(Json(entries))
}

/// POST /entries
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateEntry>,
) -> AppResult<(StatusCode, Json<CreatedEntry>)> {
    input.validate()?;
    let created = EntryRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, entry_id = %created.id, "Entry created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /entries/
///
/// Validates every record before writing any of them, then upserts the
/// whole batch in one transaction. Returns 204 No Content.
pub async fn upsert_batch(
    State(state): State<AppState>,
    user: AuthUser,
    Json(batch): Json<Vec<UpsertEntry>>,
) -> AppResult<StatusCode> {
    for (index, entry) in batch.iter().enumerate() {
        entry
            .validate()
            .map_err(|e| CoreError::Validation(format!("entry {index} ({}): {e}", entry.id)))?;
    }

    EntryRepo::upsert_batch(&state.pool, &batch).await?;
    tracing::info!(user_id = user.user_id, count = batch.len(), "Entry batch saved");
    Ok(StatusCode::NO_CONTENT)
}
