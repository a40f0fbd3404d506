//! Handlers for the `/employees` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use labourlog_db::models::employee::{CreateEmployee, Employee};
use labourlog_db::repositories::EmployeeRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /employees
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(employees))
}

/// POST /employees
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    input.validate()?;
    let employee = EmployeeRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, employee_id = %employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}
