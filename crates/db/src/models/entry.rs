//! Time entry model and DTOs.
//!
//! Entries are exchanged with the frontend in camelCase. Input DTOs also
//! accept the snake_case column names so payloads exported straight from the
//! database can be posted back unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound};
use labourlog_core::timesheet::{validate_clock_time, validate_not_blank};
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An entry row from the `entries` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub employee_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub break_min: i32,
    pub work_type: Option<String>,
    pub notes: Option<String>,
    /// Supplied by the client; never recomputed from start/end.
    pub hours: f64,
    pub rounded_from_min: Option<i32>,
    pub rounding_min: Option<i32>,
    pub status: String,
    pub locked: bool,
    pub created_at: NaiveDateTime,
}

/// Identity of a freshly inserted entry.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEntry {
    pub id: String,
    pub created_at: NaiveDateTime,
}

/// DTO for `POST /entries`: a single plain insert.
///
/// `id` and `created_at` are filled in by the database when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntry {
    #[validate(length(min = 1, max = 64))]
    pub id: Option<String>,
    #[serde(alias = "employee_id")]
    #[validate(custom(function = "validate_not_blank"))]
    pub employee_id: String,
    #[serde(alias = "project_id")]
    #[validate(custom(function = "validate_not_blank"))]
    pub project_id: String,
    pub date: NaiveDate,
    #[validate(custom(function = "validate_clock_time"))]
    pub start: String,
    #[validate(custom(function = "validate_clock_time"))]
    pub end: String,
    #[serde(alias = "break_min")]
    #[validate(range(min = 0))]
    pub break_min: Option<i32>,
    #[serde(alias = "work_type")]
    pub work_type: Option<String>,
    pub notes: Option<String>,
    #[validate(range(min = 0.0, max = 24.0))]
    pub hours: f64,
    #[serde(alias = "rounded_from_min")]
    #[validate(range(min = 0))]
    pub rounded_from_min: Option<i32>,
    #[serde(alias = "rounding_min")]
    #[validate(range(min = 0))]
    pub rounding_min: Option<i32>,
    #[validate(length(max = 32), custom(function = "validate_not_blank"))]
    pub status: Option<String>,
    pub locked: Option<bool>,
    #[serde(
        alias = "created_at",
        default,
        deserialize_with = "deserialize_optional_created_at"
    )]
    pub created_at: Option<NaiveDateTime>,
}

/// DTO for one element of the `POST /entries/` batch.
///
/// Carries every column: an upsert replaces the whole row except `id`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertEntry {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[serde(alias = "employee_id")]
    #[validate(custom(function = "validate_not_blank"))]
    pub employee_id: String,
    #[serde(alias = "project_id")]
    #[validate(custom(function = "validate_not_blank"))]
    pub project_id: String,
    pub date: NaiveDate,
    #[validate(custom(function = "validate_clock_time"))]
    pub start: String,
    #[validate(custom(function = "validate_clock_time"))]
    pub end: String,
    #[serde(alias = "break_min")]
    #[validate(range(min = 0))]
    pub break_min: i32,
    #[serde(alias = "work_type")]
    pub work_type: Option<String>,
    pub notes: Option<String>,
    #[validate(range(min = 0.0, max = 24.0))]
    pub hours: f64,
    #[serde(alias = "rounded_from_min")]
    #[validate(range(min = 0))]
    pub rounded_from_min: Option<i32>,
    #[serde(alias = "rounding_min")]
    #[validate(range(min = 0))]
    pub rounding_min: Option<i32>,
    #[validate(length(max = 32), custom(function = "validate_not_blank"))]
    pub status: String,
    pub locked: bool,
    #[serde(alias = "created_at", deserialize_with = "deserialize_created_at")]
    pub created_at: NaiveDateTime,
}

/// Parse a client-supplied creation time.
///
/// Accepts RFC 3339 with an offset (`2024-01-01T16:00:00.000Z`), converted to
/// UTC, or a zone-less `2024-01-01T16:00:00`. Precision is cut to the
/// microseconds a `TIMESTAMP` column stores.
pub fn parse_created_at(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok())?;
    Some(parsed.trunc_subsecs(6))
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_created_at(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid createdAt timestamp '{raw}'")))
}

fn deserialize_optional_created_at<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_created_at(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid createdAt timestamp '{raw}'")))
        })
        .transpose()
}
