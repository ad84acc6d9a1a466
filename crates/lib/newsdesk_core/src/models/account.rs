//! Account domain models and the role policy.
//!
//! These are internal domain models, distinct from API request/response
//! models (which carry `#[serde(rename)]` for camelCase etc.).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of account roles.
///
/// Stored in PostgreSQL as the `account_role` enum and serialized lowercase
/// on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Capability rank; a higher rank includes everything below it.
    fn rank(self) -> u8 {
        match self {
            Role::Viewer => 0,
            Role::Editor => 1,
            Role::Admin => 2,
        }
    }

    /// Whether this role meets an operation's minimum `required` role.
    pub fn permits(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Editor
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        };
        f.write_str(name)
    }
}

/// A registered account row.
///
/// `password_hash` stays inside the server; response models never carry it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub address: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// JWT claims embedded in session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject, the account id (standard JWT `sub` claim).
    pub sub: String,
    /// Account email.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_permits_everything() {
        assert!(Role::Admin.permits(Role::Admin));
        assert!(Role::Admin.permits(Role::Editor));
        assert!(Role::Admin.permits(Role::Viewer));
    }

    #[test]
    fn editor_cannot_act_as_admin() {
        assert!(!Role::Editor.permits(Role::Admin));
        assert!(Role::Editor.permits(Role::Editor));
        assert!(Role::Editor.permits(Role::Viewer));
    }

    #[test]
    fn viewer_is_the_floor() {
        assert!(!Role::Viewer.permits(Role::Admin));
        assert!(!Role::Viewer.permits(Role::Editor));
        assert!(Role::Viewer.permits(Role::Viewer));
    }

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!("\"admin\"", serde_json::to_string(&Role::Admin).unwrap());
        assert_eq!("\"editor\"", serde_json::to_string(&Role::Editor).unwrap());
        assert_eq!("\"viewer\"", serde_json::to_string(&Role::Viewer).unwrap());
    }

    #[test]
    fn default_role_is_editor() {
        assert_eq!(Role::Editor, Role::default());
    }
}
