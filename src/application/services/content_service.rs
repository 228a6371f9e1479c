//! Content items and content type registration.

use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::domain::entities::{ContentItem, ContentType, NewContentItem, NewContentType};
use crate::domain::repositories::{ContentRepository, ContentTypeRepository};
use crate::error::AppError;

/// Upper bound for listing sizes.
pub const MAX_LISTING_LIMIT: i64 = 100;

/// Service over the host content store and type registry.
pub struct ContentService<C, T>
where
    C: ContentRepository + ?Sized,
    T: ContentTypeRepository + ?Sized,
{
    content: Arc<C>,
    content_types: Arc<T>,
}

impl<C, T> ContentService<C, T>
where
    C: ContentRepository + ?Sized,
    T: ContentTypeRepository + ?Sized,
{
    pub fn new(content: Arc<C>, content_types: Arc<T>) -> Self {
        Self {
            content,
            content_types,
        }
    }

    /// Retrieves a content item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this ID.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_item(&self, id: i64) -> Result<ContentItem, AppError> {
        self.content
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Content not found", json!({ "id": id })))
    }

    /// Most recent items, newest first. `limit` is clamped to `1..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn recent(&self, limit: i64) -> Result<Vec<ContentItem>, AppError> {
        self.content
            .recent(limit.clamp(1, MAX_LISTING_LIMIT))
            .await
    }

    /// Creates a content item of a registered type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is invalid or the type
    /// is not registered.
    pub async fn create_item(&self, new_item: NewContentItem) -> Result<ContentItem, AppError> {
        new_item.validate()?;

        if self
            .content_types
            .find_by_slug(&new_item.content_type)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request(
                "Unknown content type",
                json!({ "content_type": new_item.content_type }),
            ));
        }

        let item = self.content.create(new_item).await?;
        tracing::info!(id = item.id, content_type = %item.content_type, "Content item created");
        Ok(item)
    }

    /// Registers a content type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug or label is invalid.
    /// Returns [`AppError::Conflict`] if the slug is already registered.
    pub async fn register_type(&self, new_type: NewContentType) -> Result<ContentType, AppError> {
        new_type.validate()?;

        if self
            .content_types
            .find_by_slug(&new_type.slug)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Content type already registered",
                json!({ "slug": new_type.slug }),
            ));
        }

        let created = self.content_types.create(new_type).await?;
        tracing::info!(slug = %created.slug, public = created.public, "Content type registered");
        Ok(created)
    }

    /// All registered content types in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_types(&self) -> Result<Vec<ContentType>, AppError> {
        self.content_types.list().await
    }
}
