//! Handlers for the `/auth` resource (login, current user).

use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use labourlog_db::models::user::UserInfo;
use labourlog_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_login_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The one message returned for every failed login, so callers cannot tell
/// an unknown email from a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Credentials for `POST /auth/login`. `username` is the account email.
///
/// Unknown fields (`grant_type`, `scope`, `client_id`, ...) sent by OAuth2
/// password-grant clients are ignored.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Extractor accepting [`LoginRequest`] as either a JSON body or an
/// `application/x-www-form-urlencoded` form.
#[derive(Debug)]
pub struct LoginInput(pub LoginRequest);

impl<S> FromRequest<S> for LoginInput
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let input = if is_json {
            let Json(input) = Json::<LoginRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            input
        } else {
            let Form(input) = Form::<LoginRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            input
        };

        Ok(LoginInput(input))
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/login
///
/// Authenticate with email + password. Returns a bearer token and the user.
pub async fn login(
    State(state): State<AppState>,
    LoginInput(input): LoginInput,
) -> AppResult<Json<LoginResponse>> {
    let user = UserRepo::find_by_email(&state.pool, input.username.trim()).await?;

    let password_valid = verify_login_password(
        &input.password,
        user.as_ref().map(|u| u.password_hash.as_str()),
    )
    .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    let user = match user {
        Some(user) if password_valid => user,
        Some(user) => {
            tracing::warn!(user_id = user.id, "Login rejected: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
        None => {
            tracing::warn!("Login attempt for unknown account");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// GET /auth/me
///
/// Return the account behind the bearer token.
pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<Json<UserInfo>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid token"))?;
    Ok(Json(user.into()))
}
