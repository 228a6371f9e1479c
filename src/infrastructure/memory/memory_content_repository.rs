//! In-process content items and content type registry.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{ContentItem, ContentType, NewContentItem, NewContentType};
use crate::domain::repositories::{ContentRepository, ContentTypeRepository};
use crate::error::AppError;

/// Content type registry seeded with the builtin `post` and `page` types.
pub struct MemoryContentTypeRepository {
    types: RwLock<Vec<ContentType>>,
}

impl MemoryContentTypeRepository {
    pub fn new() -> Self {
        Self {
            types: RwLock::new(vec![
                ContentType::new(1, "post".into(), "Posts".into(), true, true),
                ContentType::new(2, "page".into(), "Pages".into(), true, true),
            ]),
        }
    }
}

impl Default for MemoryContentTypeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentTypeRepository for MemoryContentTypeRepository {
    async fn create(&self, new_type: NewContentType) -> Result<ContentType, AppError> {
        let mut types = self.types.write().await;

        if types.iter().any(|t| t.slug == new_type.slug) {
            return Err(AppError::conflict(
                "Content type already registered",
                json!({ "slug": new_type.slug }),
            ));
        }

        let id = types.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let created = ContentType::new(
            id,
            new_type.slug,
            new_type.label,
            new_type.public,
            new_type.builtin,
        );
        types.push(created.clone());
        Ok(created)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentType>, AppError> {
        Ok(self.types.read().await.iter().find(|t| t.slug == slug).cloned())
    }

    async fn list(&self) -> Result<Vec<ContentType>, AppError> {
        Ok(self.types.read().await.clone())
    }
}

#[derive(Default)]
pub struct MemoryContentRepository {
    items: RwLock<Vec<ContentItem>>,
}

impl MemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentRepository for MemoryContentRepository {
    async fn create(&self, new_item: NewContentItem) -> Result<ContentItem, AppError> {
        let mut items = self.items.write().await;
        let item = ContentItem::new(
            items.len() as i64 + 1,
            new_item.content_type,
            new_item.title,
            new_item.body,
            Utc::now(),
        );
        items.push(item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, AppError> {
        Ok(self.items.read().await.iter().find(|i| i.id == id).cloned())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<ContentItem>, AppError> {
        let mut items = self.items.read().await.clone();
        items.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        items.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(items)
    }
}
