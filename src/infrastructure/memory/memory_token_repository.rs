//! In-process token store.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{AccessToken, Role};
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryTokenRepository {
    tokens: RwLock<Vec<AccessToken>>,
}

impl MemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for MemoryTokenRepository {
    async fn find_active_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<AccessToken>, AppError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .iter()
            .find(|t| t.token_hash == token_hash && !t.is_revoked())
            .cloned())
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        let mut tokens = self.tokens.write().await;
        if let Some(token) = tokens
            .iter_mut()
            .find(|t| t.token_hash == token_hash && !t.is_revoked())
        {
            token.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create_token(
        &self,
        name: &str,
        role: Role,
        token_hash: &str,
    ) -> Result<AccessToken, AppError> {
        let mut tokens = self.tokens.write().await;

        if tokens.iter().any(|t| t.name == name || t.token_hash == token_hash) {
            return Err(AppError::conflict(
                "Token already exists",
                json!({ "name": name }),
            ));
        }

        let token = AccessToken {
            id: tokens.len() as i64 + 1,
            name: name.to_string(),
            role,
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        tokens.push(token.clone());
        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<AccessToken>, AppError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AccessToken>, AppError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<AccessToken>, AppError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.iter().find(|t| t.name == name).cloned())
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        let mut tokens = self.tokens.write().await;
        if let Some(token) = tokens.iter_mut().find(|t| t.id == id && !t.is_revoked()) {
            token.revoked_at = Some(Utc::now());
        }
        Ok(())
    }
}
