use std::sync::Arc;

use argon2::{password_hash::PasswordVerifier, Argon2, PasswordHash};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use tracing::{info, instrument, warn};

use super::domain::{AuthSession, Claims, LoginInput};
use super::errors::AuthError;
use super::repository::CredentialStore;

/// Token signing settings
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

impl From<&configs::AuthConfig> for AuthSettings {
    fn from(cfg: &configs::AuthConfig) -> Self {
        Self { jwt_secret: cfg.jwt_secret.clone(), token_ttl_minutes: cfg.token_ttl_minutes }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: CredentialStore> {
    repo: Arc<R>,
    cfg: AuthSettings,
}

impl<R: CredentialStore> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthSettings) -> Self { Self { repo, cfg } }

    /// Check the administrator password and issue a bearer token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{repository::hash_password, AuthService, AuthSettings, StaticCredentialStore};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let store = StaticCredentialStore::new("admin", hash_password("Passw0rd").unwrap());
    /// let svc = AuthService::new(Arc::new(store), AuthSettings { jwt_secret: "secret".into(), token_ttl_minutes: 60 });
    /// let session = tokio_test::block_on(svc.login(LoginInput { username: "admin".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.token_type, "bearer");
    /// assert_eq!(svc.verify(&session.access_token).unwrap().sub, "admin");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let res = self.authenticate(input).await;
        common::metrics::record_login(res.is_ok());
        match &res {
            Ok(_) => info!("login_succeeded"),
            Err(e) => warn!(code = e.code(), "login_rejected"),
        }
        res
    }

    async fn authenticate(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        if input.username.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation("username and password are required".into()));
        }
        let account = self.repo.find_account(&input.username).await?.ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&account.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }

        let iat = Utc::now();
        let exp = Duration::try_minutes(self.cfg.token_ttl_minutes)
            .and_then(|ttl| iat.checked_add_signed(ttl))
            .ok_or_else(|| AuthError::TokenError("token lifetime out of range".into()))?;
        let claims = Claims { sub: account.username, iat: iat.timestamp(), exp: exp.timestamp() };
        let token = encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))?;

        Ok(AuthSession { access_token: token, token_type: "bearer".into(), expires_at: claims.exp })
    }

    /// Validate signature and expiry of a bearer token.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let key = DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }
}
