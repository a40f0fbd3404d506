//! Repository for the `employees` table.

use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, badge, pin";

/// Provides list and create operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (name, badge, pin)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(&input.badge)
            .bind(&input.pin)
            .fetch_one(pool)
            .await
    }

    /// List all employees ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY name, id");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }
}
