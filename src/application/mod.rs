//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give handlers a small API.
//!
//! # Available Services
//!
//! - [`services::settings_service::SettingsService`] - Enabled content types
//! - [`services::link_editor_service::LinkEditorService`] - Per-post redirect URL
//! - [`services::redirect_service::RedirectService`] - Front-end link substitution
//! - [`services::content_service::ContentService`] - Content items and types
//! - [`services::auth_service::AuthService`] - Session token authentication
//! - [`services::nonce_service::NonceService`] - Form CSRF tokens
//! - [`services::permission_service::PermissionService`] - Capability gates

pub mod services;
