//! Employee model and DTOs.

use labourlog_core::timesheet::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub badge: Option<String>,
    pub pin: Option<String>,
}

/// DTO for creating a new employee.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployee {
    #[validate(length(max = 200), custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(length(max = 64))]
    pub badge: Option<String>,
    #[validate(length(max = 16))]
    pub pin: Option<String>,
}
