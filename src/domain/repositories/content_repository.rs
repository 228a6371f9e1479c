//! Repository trait for content items.

use crate::domain::entities::{ContentItem, NewContentItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Read and create access to published content items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Creates a content item, published now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_item: NewContentItem) -> Result<ContentItem, AppError>;

    /// Finds a content item by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, AppError>;

    /// Lists the most recently published items, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn recent(&self, limit: i64) -> Result<Vec<ContentItem>, AppError>;
}
