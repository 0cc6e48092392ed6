//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in the schema.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_EDITOR: &str = "editor";

/// All valid role values.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER, ROLE_EDITOR];

/// Validate a role name.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Papel inválido: '{role}'. Valores válidos: {}",
            VALID_ROLES.join(", ")
        ))
    }
}
