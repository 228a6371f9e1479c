//! Repository trait for per-content redirect URLs.

use crate::error::AppError;
use async_trait::async_trait;

/// Storage of the redirect URL metadata attached to content items.
///
/// Each call touches exactly one key; concurrent writers race and the last
/// write wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkMetaRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryLinkMetaRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkMetaRepository: Send + Sync {
    /// Reads the stored redirect URL of a content item.
    ///
    /// Returns `Ok(None)` if nothing was ever saved for the item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_url(&self, content_id: i64) -> Result<Option<String>, AppError>;

    /// Creates or overwrites the redirect URL of a content item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn put_url(&self, content_id: i64, url: &str) -> Result<(), AppError>;
}
