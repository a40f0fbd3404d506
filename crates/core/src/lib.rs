//! Domain primitives shared by the database and API crates.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod roles;
pub mod timesheet;
pub mod types;
