//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - A `Deserialize` + `Validate` DTO for inserts

pub mod employee;
pub mod entry;
pub mod project;
pub mod user;
