//! Repository for the `entries` table.

use labourlog_core::timesheet::DEFAULT_ENTRY_STATUS;
use sqlx::PgPool;

use crate::models::entry::{CreateEntry, CreatedEntry, Entry, UpsertEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, employee_id, project_id, date, start, \"end\", break_min, work_type, \
                       notes, hours, rounded_from_min, rounding_min, status, locked, created_at";

/// Provides list, create, and batch upsert operations for entries.
pub struct EntryRepo;

impl EntryRepo {
    /// List all entries, newest `created_at` first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries ORDER BY created_at DESC, id");
        sqlx::query_as::<_, Entry>(&query).fetch_all(pool).await
    }

    /// Insert a single entry. Does not overwrite: an existing id is a
    /// primary-key violation.
    ///
    /// Omitted `id` / `created_at` fall back to the column defaults.
    pub async fn create(pool: &PgPool, input: &CreateEntry) -> Result<CreatedEntry, sqlx::Error> {
        sqlx::query_as::<_, CreatedEntry>(
            "INSERT INTO entries (
                id, employee_id, project_id, date, start, \"end\", break_min, work_type,
                notes, hours, rounded_from_min, rounding_min, status, locked, created_at
             ) VALUES (
                COALESCE($1, gen_random_uuid()::text), $2, $3, $4, $5, $6, COALESCE($7, 0), $8,
                $9, $10, $11, $12, COALESCE($13, $14), COALESCE($15, FALSE),
                COALESCE($16, NOW() AT TIME ZONE 'utc')
             )
             RETURNING id, created_at",
        )
        .bind(&input.id)
        .bind(&input.employee_id)
        .bind(&input.project_id)
        .bind(input.date)
        .bind(&input.start)
        .bind(&input.end)
        .bind(input.break_min)
        .bind(&input.work_type)
        .bind(&input.notes)
        .bind(input.hours)
        .bind(input.rounded_from_min)
        .bind(input.rounding_min)
        .bind(&input.status)
        .bind(DEFAULT_ENTRY_STATUS)
        .bind(input.locked)
        .bind(input.created_at)
        .fetch_one(pool)
        .await
    }

    /// Insert-or-replace a batch of entries within one transaction.
    ///
    /// Rows are written in slice order, so a repeated id ends up with its
    /// last occurrence. Any failure rolls back the whole batch.
    pub async fn upsert_batch(pool: &PgPool, entries: &[UpsertEntry]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO entries ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             ON CONFLICT (id) DO UPDATE SET \
                employee_id = EXCLUDED.employee_id, \
                project_id = EXCLUDED.project_id, \
                date = EXCLUDED.date, \
                start = EXCLUDED.start, \
                \"end\" = EXCLUDED.\"end\", \
                break_min = EXCLUDED.break_min, \
                work_type = EXCLUDED.work_type, \
                notes = EXCLUDED.notes, \
                hours = EXCLUDED.hours, \
                rounded_from_min = EXCLUDED.rounded_from_min, \
                rounding_min = EXCLUDED.rounding_min, \
                status = EXCLUDED.status, \
                locked = EXCLUDED.locked, \
                created_at = EXCLUDED.created_at"
        );

        for entry in entries {
            sqlx::query(&query)
                .bind(&entry.id)
                .bind(&entry.employee_id)
                .bind(&entry.project_id)
                .bind(entry.date)
                .bind(&entry.start)
                .bind(&entry.end)
                .bind(entry.break_min)
                .bind(&entry.work_type)
                .bind(&entry.notes)
                .bind(entry.hours)
                .bind(entry.rounded_from_min)
                .bind(entry.rounding_min)
                .bind(&entry.status)
                .bind(entry.locked)
                .bind(entry.created_at)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        tracing::debug!(count = entries.len(), "Upserted entry batch");
        Ok(())
    }
}
