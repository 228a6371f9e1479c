//! Repository trait for site-wide settings.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Versionless key-value store for site settings.
///
/// Values are stored exactly as given; callers interpret them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OptionRepository: Send + Sync {
    /// Reads a setting. `Ok(None)` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_option(&self, name: &str) -> Result<Option<Value>, AppError>;

    /// Creates or overwrites a setting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_option(&self, name: &str, value: Value) -> Result<(), AppError>;
}
