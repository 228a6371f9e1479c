//! PostgreSQL implementation of content repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{ContentItem, NewContentItem};
use crate::domain::repositories::ContentRepository;
use crate::error::AppError;

pub struct PgContentRepository {
    pool: Arc<PgPool>,
}

impl PgContentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ContentRow {
    id: i64,
    content_type: String,
    title: String,
    body: String,
    published_at: DateTime<Utc>,
}

impl From<ContentRow> for ContentItem {
    fn from(row: ContentRow) -> Self {
        ContentItem::new(
            row.id,
            row.content_type,
            row.title,
            row.body,
            row.published_at,
        )
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn create(&self, new_item: NewContentItem) -> Result<ContentItem, AppError> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            INSERT INTO content_items (content_type, title, body)
            VALUES ($1, $2, $3)
            RETURNING id, content_type, title, body, published_at
            "#,
        )
        .bind(&new_item.content_type)
        .bind(&new_item.title)
        .bind(&new_item.body)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, AppError> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            SELECT id, content_type, title, body, published_at
            FROM content_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn recent(&self, limit: i64) -> Result<Vec<ContentItem>, AppError> {
        let rows = sqlx::query_as::<_, ContentRow>(
            r#"
            SELECT id, content_type, title, body, published_at
            FROM content_items
            ORDER BY published_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
