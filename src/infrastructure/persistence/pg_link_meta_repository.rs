//! PostgreSQL implementation of the redirect URL store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::REDIRECT_URL_META_KEY;
use crate::domain::repositories::LinkMetaRepository;
use crate::error::AppError;

/// Redirect URLs kept in the `content_meta` table under a fixed key.
pub struct PgLinkMetaRepository {
    pool: Arc<PgPool>,
}

impl PgLinkMetaRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkMetaRepository for PgLinkMetaRepository {
    async fn get_url(&self, content_id: i64) -> Result<Option<String>, AppError> {
        let url = sqlx::query_scalar::<_, String>(
            r#"
            SELECT meta_value
            FROM content_meta
            WHERE content_id = $1 AND meta_key = $2
            "#,
        )
        .bind(content_id)
        .bind(REDIRECT_URL_META_KEY)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn put_url(&self, content_id: i64, url: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO content_meta (content_id, meta_key, meta_value)
            VALUES ($1, $2, $3)
            ON CONFLICT (content_id, meta_key) DO UPDATE
            SET meta_value = EXCLUDED.meta_value
            "#,
        )
        .bind(content_id)
        .bind(REDIRECT_URL_META_KEY)
        .bind(url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
