use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    auth::{errors::AuthError, AuthService, AuthSettings, StaticCredentialStore},
    pagination::{DEFAULT_LIMIT, DEFAULT_MAX_LIMIT},
    ContentResource, ContentService, Pagination,
};

/// Page size bounds for listing endpoints.
#[derive(Clone, Copy, Debug)]
pub struct PageSettings {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for PageSettings {
    fn default() -> Self { Self { default_limit: DEFAULT_LIMIT, max_limit: DEFAULT_MAX_LIMIT } }
}

impl From<&configs::ContentConfig> for PageSettings {
    fn from(cfg: &configs::ContentConfig) -> Self {
        Self { default_limit: cfg.default_page_size, max_limit: cfg.max_page_size }
    }
}

impl PageSettings {
    /// Fill missing query values and clamp the limit.
    pub fn resolve(&self, skip: Option<u64>, limit: Option<u64>) -> Pagination {
        Pagination::new(skip.unwrap_or(0), limit.unwrap_or(self.default_limit)).normalize(self.max_limit)
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: Arc<AuthService<StaticCredentialStore>>,
    pub pages: PageSettings,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth: AuthService<StaticCredentialStore>, pages: PageSettings) -> Self {
        Self { db, auth: Arc::new(auth), pages }
    }

    /// Wire the auth service and page bounds from configuration.
    pub fn from_config(db: DatabaseConnection, cfg: &configs::AppConfig) -> Result<Self, AuthError> {
        let store = StaticCredentialStore::from_config(&cfg.auth)?;
        let auth = AuthService::new(Arc::new(store), AuthSettings::from(&cfg.auth));
        Ok(Self::new(db, auth, PageSettings::from(&cfg.content)))
    }

    pub fn content<R: ContentResource>(&self) -> ContentService<R> { ContentService::new(self.db.clone()) }
}
