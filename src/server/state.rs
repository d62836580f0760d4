use crate::auth::JwtAuth;
use crate::config::AppConfig;
use crate::extractors::AiExtractor;
use crate::store::MenuStore;
use tokio::sync::RwLock;

/// Shared state handed to every handler
pub struct AppState {
    pub store: RwLock<MenuStore>,
    pub extractor: AiExtractor,
    pub auth: JwtAuth,
    pub public_url: String,
}

impl AppState {
    pub fn new(extractor: AiExtractor, auth: JwtAuth, public_url: impl Into<String>) -> Self {
        Self {
            store: RwLock::new(MenuStore::new()),
            extractor,
            auth,
            public_url: public_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            AiExtractor::from_config(&config.ai),
            JwtAuth::from_config(&config.auth),
            config.server.public_url.clone(),
        )
    }
}
