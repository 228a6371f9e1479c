//! Repository trait for the content type registry.

use crate::domain::entities::{ContentType, NewContentType};
use crate::error::AppError;
use async_trait::async_trait;

/// Registry of content types, kept in registration order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentTypeRepository: Send + Sync {
    /// Registers a content type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already registered.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_type: NewContentType) -> Result<ContentType, AppError>;

    /// Finds a content type by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentType>, AppError>;

    /// Lists every registered content type in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<ContentType>, AppError>;
}
