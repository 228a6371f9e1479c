//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AuthService, ContentService, LinkEditorService, NonceService, PermissionService,
    RedirectService, SettingsService,
};
use crate::config::Config;
use crate::domain::capability::{CapabilityChecker, EDIT_POSTS, MANAGE_OPTIONS, RoleCapabilities};
use crate::domain::repositories::{
    ContentRepository, ContentTypeRepository, LinkMetaRepository, OptionRepository, StoreHealth,
    TokenRepository,
};
use crate::infrastructure::Repositories;

pub type AppAuthService = AuthService<dyn TokenRepository>;
pub type AppSettingsService = SettingsService<dyn OptionRepository, dyn ContentTypeRepository>;
pub type AppLinkEditorService = LinkEditorService<dyn LinkMetaRepository>;
pub type AppContentService = ContentService<dyn ContentRepository, dyn ContentTypeRepository>;
pub type AppRedirectService = RedirectService<dyn LinkMetaRepository, dyn OptionRepository>;

/// Settings the services are built from.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub signing_secret: String,
    pub nonce_lifetime_seconds: u64,
    pub link_capability: String,
    pub settings_capability: String,
    pub recent_posts_limit: i64,
}

impl ServiceSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            signing_secret: config.token_signing_secret.clone(),
            nonce_lifetime_seconds: config.nonce_lifetime_seconds,
            link_capability: config.link_capability.clone(),
            settings_capability: config.settings_capability.clone(),
            recent_posts_limit: config.recent_posts_limit,
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            signing_secret: String::new(),
            nonce_lifetime_seconds: 86_400,
            link_capability: EDIT_POSTS.to_string(),
            settings_capability: MANAGE_OPTIONS.to_string(),
            recent_posts_limit: 10,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AppAuthService>,
    pub nonce_service: Arc<NonceService>,
    pub permissions: Arc<PermissionService>,
    pub settings_service: Arc<AppSettingsService>,
    pub link_editor: Arc<AppLinkEditorService>,
    pub content_service: Arc<AppContentService>,
    pub redirect_service: Arc<AppRedirectService>,
    pub store: Arc<dyn StoreHealth>,
    pub recent_posts_limit: i64,
}

impl AppState {
    /// Wires every service over one set of repositories.
    pub fn new(repositories: Repositories, settings: ServiceSettings) -> Self {
        let checker: Arc<dyn CapabilityChecker> = Arc::new(RoleCapabilities);

        Self {
            auth_service: Arc::new(AuthService::new(
                repositories.tokens.clone(),
                settings.signing_secret.clone(),
            )),
            nonce_service: Arc::new(NonceService::new(
                settings.signing_secret,
                settings.nonce_lifetime_seconds,
            )),
            permissions: Arc::new(PermissionService::new(
                checker,
                settings.link_capability,
                settings.settings_capability,
            )),
            settings_service: Arc::new(SettingsService::new(
                repositories.options.clone(),
                repositories.content_types.clone(),
            )),
            link_editor: Arc::new(LinkEditorService::new(repositories.link_meta.clone())),
            content_service: Arc::new(ContentService::new(
                repositories.content.clone(),
                repositories.content_types.clone(),
            )),
            redirect_service: Arc::new(RedirectService::new(
                repositories.link_meta,
                repositories.options,
            )),
            store: repositories.health,
            recent_posts_limit: settings.recent_posts_limit,
        }
    }
}
