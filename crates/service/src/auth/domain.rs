use serde::{Deserialize, Serialize};

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Stored administrator credentials (hashed)
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    /// argon2 PHC string
    pub password_hash: String,
}

/// JWT claims carried by the bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Login result (session)
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    /// Unix seconds
    pub expires_at: i64,
}
