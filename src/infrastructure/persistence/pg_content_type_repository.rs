//! PostgreSQL implementation of the content type registry.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{ContentType, NewContentType};
use crate::domain::repositories::ContentTypeRepository;
use crate::error::AppError;

pub struct PgContentTypeRepository {
    pool: Arc<PgPool>,
}

impl PgContentTypeRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ContentTypeRow {
    id: i64,
    slug: String,
    label: String,
    public: bool,
    builtin: bool,
}

impl From<ContentTypeRow> for ContentType {
    fn from(row: ContentTypeRow) -> Self {
        ContentType::new(row.id, row.slug, row.label, row.public, row.builtin)
    }
}

#[async_trait]
impl ContentTypeRepository for PgContentTypeRepository {
    async fn create(&self, new_type: NewContentType) -> Result<ContentType, AppError> {
        let row = sqlx::query_as::<_, ContentTypeRow>(
            r#"
            INSERT INTO content_types (slug, label, public, builtin)
            VALUES ($1, $2, $3, $4)
            RETURNING id, slug, label, public, builtin
            "#,
        )
        .bind(&new_type.slug)
        .bind(&new_type.label)
        .bind(new_type.public)
        .bind(new_type.builtin)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentType>, AppError> {
        let row = sqlx::query_as::<_, ContentTypeRow>(
            "SELECT id, slug, label, public, builtin FROM content_types WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<ContentType>, AppError> {
        // Registration order
        let rows = sqlx::query_as::<_, ContentTypeRow>(
            "SELECT id, slug, label, public, builtin FROM content_types ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
