//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `labourlog_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod employee;
pub mod entry;
pub mod project;
