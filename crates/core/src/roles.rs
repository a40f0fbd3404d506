//! Well-known role name constants.
//!
//! Roles are stored as plain text on the `users` row and copied into the
//! `role` claim of every access token.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPERVISOR: &str = "supervisor";
pub const ROLE_OPERATOR: &str = "operator";
