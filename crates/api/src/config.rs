use std::fmt::Display;
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Source of configuration values, keyed by environment variable name.
///
/// Production reads the process environment; tests pass a closure over a map.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Start-up configuration failures. Any of these aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Which origins the CORS layer admits.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// `CORS_ORIGINS=*`. Never combined with credentials.
    Any,
    /// Explicit allow-list of exact origins.
    List(Vec<HeaderValue>),
}

/// Cross-origin policy.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub origins: CorsOrigins,
    pub allow_credentials: bool,
}

/// Credentials for the admin account created at start-up.
#[derive(Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` and `JWT_SECRET` has a default suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Normalised PostgreSQL connection string.
    pub database_url: String,
    /// Cross-origin policy.
    pub cors: CorsConfig,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Admin account to create or refresh at start-up, if configured.
    pub admin: Option<AdminBootstrap>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                  | Default                  |
    /// |--------------------------|--------------------------|
    /// | `DATABASE_URL`           | **required**             |
    /// | `HOST`                   | `0.0.0.0`                |
    /// | `PORT`                   | `3000`                   |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`  |
    /// | `CORS_ALLOW_CREDENTIALS` | `true`                   |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                     |
    /// | `ADMIN_EMAIL`            | unset                    |
    /// | `ADMIN_PASSWORD`         | unset                    |
    /// | `ADMIN_NAME`             | `Administrator`          |
    ///
    /// See [`JwtConfig::from_lookup`] for the `JWT_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parsed_or(lookup, "PORT", 3000)?;

        let database_url = labourlog_db::normalize_database_url(&required(lookup, "DATABASE_URL")?);

        let origins = parse_cors_origins(
            &lookup("CORS_ORIGINS").unwrap_or_else(|| "http://localhost:5173".into()),
        )?;
        let mut allow_credentials: bool = parsed_or(lookup, "CORS_ALLOW_CREDENTIALS", true)?;
        if origins == CorsOrigins::Any && allow_credentials {
            tracing::warn!("CORS_ORIGINS=* cannot be combined with credentials; disabling them");
            allow_credentials = false;
        }

        let request_timeout_secs: u64 = parsed_or(lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let jwt = JwtConfig::from_lookup(lookup)?;

        let admin = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                email: email.trim().to_string(),
                password,
                name: lookup("ADMIN_NAME").unwrap_or_else(|| "Administrator".into()),
            }),
            (Some(_), None) => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("ADMIN_EMAIL")),
            (None, None) => None,
        };

        Ok(Self {
            host,
            port,
            database_url,
            cors: CorsConfig {
                origins,
                allow_credentials,
            },
            request_timeout_secs,
            jwt,
            admin,
        })
    }
}

/// Read a variable that must be present and non-empty.
pub fn required(lookup: Lookup<'_>, name: &'static str) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Read and parse a variable, falling back to `default` when unset.
pub fn parsed_or<T>(lookup: Lookup<'_>, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

/// Parse the comma-separated `CORS_ORIGINS` value.
fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
