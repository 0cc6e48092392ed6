//! Authentication: JWT access tokens, Argon2id password hashing, and the
//! first-run admin bootstrap.

pub mod jwt;
pub mod password;

use lumeo_db::models::user::CreateUser;
use lumeo_db::repositories::UserRepo;
use lumeo_db::DbPool;

/// Create the initial admin account on an empty `users` table.
///
/// Reads `ADMIN_EMAIL` and `ADMIN_PASSWORD` from the environment; does
/// nothing when either is unset or when any user already exists. Called once
/// at startup, after migrations.
pub async fn bootstrap_admin(pool: &DbPool) -> Result<(), anyhow::Error> {
    let (email, password) = match (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Ok(()),
    };

    if UserRepo::count(pool).await? > 0 {
        return Ok(());
    }

    let password_hash = password::hash_password(&password)
        .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {e}"))?;

    let input = CreateUser {
        name: "Administrador".to_string(),
        email,
        password: String::new(),
        role: Some(lumeo_core::roles::ROLE_ADMIN.to_string()),
        can_view_finance: Some(true),
        can_edit_projects: Some(true),
        can_view_all_projects: Some(true),
    };
    let user = UserRepo::create(pool, &input, &password_hash).await?;
    tracing::info!(user_id = user.id, email = %user.email, "Bootstrapped admin user");

    Ok(())
}
