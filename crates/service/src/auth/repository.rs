use argon2::{
    password_hash::{PasswordHash, PasswordHasher, SaltString},
    Argon2,
};
use async_trait::async_trait;
use rand::rngs::OsRng;
use tracing::warn;

use super::domain::AdminAccount;
use super::errors::AuthError;

/// Password used when configuration provides neither a password nor a hash.
const DEV_ADMIN_PASSWORD: &str = "admin";

/// Source of administrator credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_account(&self, username: &str) -> Result<Option<AdminAccount>, AuthError>;
}

/// Hash a plain password into an argon2 PHC string.
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

/// One account fixed at startup.
#[derive(Debug, Clone)]
pub struct StaticCredentialStore {
    account: AdminAccount,
}

impl StaticCredentialStore {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self { account: AdminAccount { username: username.into(), password_hash: password_hash.into() } }
    }

    /// Build from `[auth]`: a configured hash wins over a plain password,
    /// and with neither the development password is hashed.
    pub fn from_config(cfg: &configs::AuthConfig) -> Result<Self, AuthError> {
        let hash = match (&cfg.admin_password_hash, &cfg.admin_password) {
            (Some(hash), _) => {
                PasswordHash::new(hash).map_err(|e| AuthError::HashError(format!("admin_password_hash: {e}")))?;
                hash.clone()
            }
            (None, Some(plain)) => hash_password(plain)?,
            (None, None) => {
                warn!(username = %cfg.admin_username, "no admin password configured, using development default");
                hash_password(DEV_ADMIN_PASSWORD)?
            }
        };
        Ok(Self::new(cfg.admin_username.clone(), hash))
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn find_account(&self, username: &str) -> Result<Option<AdminAccount>, AuthError> {
        Ok((self.account.username == username).then(|| self.account.clone()))
    }
}
