//! User model - fixed-role accounts provisioned by the seed step.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::Employee,
        }
    }
}

/// User entity as stored.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub name: String,
}

impl User {
    pub fn role(&self) -> Role {
        Role::from_string(&self.role)
    }

    /// Identity without the credential material: what goes into the session
    /// and back to the client.
    pub fn sanitized(&self) -> SessionUser {
        SessionUser {
            username: self.username.clone(),
            name: self.name.clone(),
            role: self.role(),
        }
    }
}

/// Role-bearing identity held by a session. Logout discards it entirely;
/// there is no ambient current-user state anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub name: String,
    pub role: Role,
}
