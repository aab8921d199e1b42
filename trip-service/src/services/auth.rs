//! Credential verification.

use crate::error::AppError;
use crate::models::SessionUser;
use crate::services::Database;
use crate::utils::{hash_password, verify_password, Password, PasswordHashString};

/// Checks submitted credentials against the stored Argon2 hashes.
///
/// Every failure - unknown username, wrong password, unreadable stored hash -
/// collapses into the same "Invalid credentials" result so callers cannot
/// probe which usernames exist.
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    /// Verified against when the username is unknown, so that path performs
    /// the same Argon2 work as a password mismatch.
    dummy_hash: PasswordHashString,
}

impl AuthService {
    pub fn new(db: Database) -> Result<Self, AppError> {
        let dummy_hash = hash_password(&Password::new("invalid".to_string()))?;
        Ok(Self { db, dummy_hash })
    }

    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionUser, AppError> {
        let password = Password::new(password.to_string());

        match self.db.find_user(username).await? {
            Some(user) => {
                let stored = PasswordHashString::new(user.password_hash.clone());
                verify_password(&password, &stored).map_err(|_| {
                    tracing::debug!(username, "Password mismatch");
                    Self::invalid_credentials()
                })?;
                Ok(user.sanitized())
            }
            None => {
                let _ = verify_password(&password, &self.dummy_hash);
                tracing::debug!(username, "Unknown username");
                Err(Self::invalid_credentials())
            }
        }
    }

    fn invalid_credentials() -> AppError {
        AppError::Unauthorized(anyhow::anyhow!("Invalid credentials"))
    }
}
