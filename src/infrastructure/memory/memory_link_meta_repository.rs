//! In-process redirect URL store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::LinkMetaRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryLinkMetaRepository {
    urls: RwLock<HashMap<i64, String>>,
}

impl MemoryLinkMetaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkMetaRepository for MemoryLinkMetaRepository {
    async fn get_url(&self, content_id: i64) -> Result<Option<String>, AppError> {
        Ok(self.urls.read().await.get(&content_id).cloned())
    }

    async fn put_url(&self, content_id: i64, url: &str) -> Result<(), AppError> {
        self.urls.write().await.insert(content_id, url.to_string());
        Ok(())
    }
}
