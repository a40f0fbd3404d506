//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod employee_repo;
pub mod entry_repo;
pub mod project_repo;
pub mod user_repo;

pub use employee_repo::EmployeeRepo;
pub use entry_repo::EntryRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
