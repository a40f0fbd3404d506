//! Start-up provisioning of the admin account.

use anyhow::Context;
use labourlog_core::roles::ROLE_ADMIN;
use labourlog_db::models::user::CreateUser;
use labourlog_db::repositories::UserRepo;
use labourlog_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::config::AdminBootstrap;

/// Create the configured admin user, or reset its name, password and role
/// if an account with that email already exists.
pub async fn ensure_admin(pool: &DbPool, admin: &AdminBootstrap) -> anyhow::Result<()> {
    validate_password_strength(&admin.password)
        .map_err(anyhow::Error::msg)
        .context("ADMIN_PASSWORD is too weak")?;

    let password_hash = hash_password(&admin.password)
        .map_err(|e| anyhow::anyhow!("failed to hash ADMIN_PASSWORD: {e}"))?;

    let user = UserRepo::upsert_by_email(
        pool,
        &CreateUser {
            email: admin.email.clone(),
            name: admin.name.clone(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await
    .context("failed to upsert admin user")?;

    tracing::info!(user_id = user.id, email = %user.email, "Admin account ready");
    Ok(())
}
