pub mod auth;
pub mod employee;
pub mod entry;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
/// /auth/me                    current user (auth required)
///
/// /employees                  list, create (auth required)
/// /projects                   list, create (auth required)
///
/// /entries                    list, create single (auth required)
/// /entries/                   list, batch upsert (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(employee::router())
        .merge(project::router())
        .merge(entry::router())
}
