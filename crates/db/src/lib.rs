//! Database layer: connection pool, migrations, row models and repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Upper bound on pooled connections.
const MAX_CONNECTIONS: u32 = 20;

/// How long a handler waits for a free connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Scheme prefixes rewritten to the canonical `postgres://`.
///
/// Hosting dashboards hand out `postgresql://` URLs, and URLs copied from
/// Python deployments carry a driver suffix (`postgresql+psycopg://`).
const POSTGRES_SCHEME_ALIASES: &[&str] = &["postgresql", "postgres"];

/// Normalise a connection string's scheme to `postgres://`.
///
/// Any `+driver` qualifier is dropped. URLs with other schemes are returned
/// unchanged so the driver can report them.
pub fn normalize_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let base = scheme.split('+').next().unwrap_or(scheme);
    if POSTGRES_SCHEME_ALIASES
        .iter()
        .any(|alias| base.eq_ignore_ascii_case(alias))
    {
        format!("postgres://{rest}")
    } else {
        url.to_string()
    }
}

/// Create a connection pool from a database URL.
///
/// Connections are pinged before being handed out and returned to the pool
/// when the borrowing query or transaction finishes, on success or error.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .test_before_acquire(true)
        .connect(&normalize_database_url(database_url))
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
