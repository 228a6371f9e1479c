//! PostgreSQL implementation of option repository.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::repositories::OptionRepository;
use crate::error::AppError;

/// Site settings stored as JSONB values keyed by name.
pub struct PgOptionRepository {
    pool: Arc<PgPool>,
}

impl PgOptionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OptionRepository for PgOptionRepository {
    async fn get_option(&self, name: &str) -> Result<Option<Value>, AppError> {
        let value: Option<Json<Value>> =
            sqlx::query_scalar("SELECT value FROM options WHERE name = $1")
                .bind(name)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(value.map(|Json(v)| v))
    }

    async fn update_option(&self, name: &str, value: Value) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO options (name, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (name) DO UPDATE
            SET value = EXCLUDED.value,
                updated_at = NOW()
            "#,
        )
        .bind(name)
        .bind(Json(value))
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
