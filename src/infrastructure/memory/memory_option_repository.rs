//! In-process settings store.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::repositories::OptionRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryOptionRepository {
    options: RwLock<HashMap<String, Value>>,
}

impl MemoryOptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OptionRepository for MemoryOptionRepository {
    async fn get_option(&self, name: &str) -> Result<Option<Value>, AppError> {
        Ok(self.options.read().await.get(name).cloned())
    }

    async fn update_option(&self, name: &str, value: Value) -> Result<(), AppError> {
        self.options.write().await.insert(name.to_string(), value);
        Ok(())
    }
}
