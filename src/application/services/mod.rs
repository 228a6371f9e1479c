//! Business logic services for the application layer.

pub mod auth_service;
pub mod content_service;
pub mod link_editor_service;
pub mod nonce_service;
pub mod permission_service;
pub mod redirect_service;
pub mod settings_service;

pub use auth_service::AuthService;
pub use content_service::ContentService;
pub use link_editor_service::{
    LINK_FIELD, LINK_NONCE_ACTION, LINK_NONCE_FIELD, LinkEditorService,
};
pub use nonce_service::NonceService;
pub use permission_service::PermissionService;
pub use redirect_service::{Dispatch, RedirectService, ResolvedLink};
pub use settings_service::{
    ContentTypeChoice, OPTION_GROUP, SELECTION_FIELD, SETTINGS_NONCE_ACTION, SETTINGS_NONCE_FIELD,
    SettingsCheckbox, SettingsService,
};
