//! Project model and DTOs.

use labourlog_core::timesheet::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

/// DTO for creating a new project.
///
/// `code` is not checked for uniqueness.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(max = 64), custom(function = "validate_not_blank"))]
    pub code: String,
    #[validate(length(max = 200), custom(function = "validate_not_blank"))]
    pub name: String,
}
