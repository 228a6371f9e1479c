//! Authentication service for session tokens.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{AccessToken, Caller, Role};
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for resolving callers from raw access tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. Read access to the token table is not enough to forge a
/// session without the server-side secret.
pub struct AuthService<R: TokenRepository + ?Sized> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Resolves the caller owning a raw token.
    ///
    /// On success, updates the token's `last_used_at` timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is empty, unknown or revoked.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn authenticate(&self, token: &str) -> Result<Caller, AppError> {
        if token.is_empty() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Empty token"}),
            ));
        }

        let token_hash = self.hash_token(token);

        let Some(stored) = self.repository.find_active_by_hash(&token_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        };

        if let Err(e) = self.repository.update_last_used(&token_hash).await {
            tracing::warn!(error = %e, token_id = stored.id, "Failed to update token last_used_at");
        }

        Ok(stored.caller())
    }

    /// Stores a new token for `name` with the given role.
    ///
    /// Only the HMAC hash of `raw_token` is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name or token is empty.
    /// Returns [`AppError::Conflict`] if the name or token is already in use.
    pub async fn register_token(
        &self,
        name: &str,
        role: Role,
        raw_token: &str,
    ) -> Result<AccessToken, AppError> {
        if name.trim().is_empty() || raw_token.is_empty() {
            return Err(AppError::bad_request(
                "Token name and value must not be empty",
                json!({}),
            ));
        }

        let token_hash = self.hash_token(raw_token);
        let token = self
            .repository
            .create_token(name.trim(), role, &token_hash)
            .await?;

        tracing::info!(token_id = token.id, name = %token.name, role = %token.role, "Access token created");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;
    use chrono::Utc;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn compute_expected_hash(token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(test_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn stored_token(id: i64, role: Role, hash: &str) -> AccessToken {
        AccessToken {
            id,
            name: "Editor desk".to_string(),
            role,
            token_hash: hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockTokenRepository::new();

        let token = "valid-token";
        let expected_hash = compute_expected_hash(token);
        let stored = stored_token(4, Role::Editor, &expected_hash);

        mock_repo
            .expect_find_active_by_hash()
            .withf(move |hash| hash == &expected_hash)
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        mock_repo
            .expect_update_last_used()
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let caller = service.authenticate(token).await.unwrap();

        assert_eq!(caller.id, 4);
        assert_eq!(caller.role, Role::Editor);
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_find_active_by_hash()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update_last_used().times(0);

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate("invalid-token").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_empty_token_skips_lookup() {
        let mut mock_repo = MockTokenRepository::new();
        mock_repo.expect_find_active_by_hash().times(0);

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate("").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_last_used_failure_does_not_block_login() {
        let mut mock_repo = MockTokenRepository::new();
        let hash = compute_expected_hash("tok");
        let stored = stored_token(1, Role::Administrator, &hash);

        mock_repo
            .expect_find_active_by_hash()
            .returning(move |_| Ok(Some(stored.clone())));
        mock_repo
            .expect_update_last_used()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        assert!(service.authenticate("tok").await.is_ok());
    }

    #[tokio::test]
    async fn test_register_token_stores_hash_only() {
        let mut mock_repo = MockTokenRepository::new();
        let expected_hash = compute_expected_hash("raw-value");

        mock_repo
            .expect_create_token()
            .withf(move |name, role, hash| {
                name == "Newsroom" && *role == Role::Author && hash == &expected_hash
            })
            .times(1)
            .returning(|name, role, hash| {
                Ok(AccessToken {
                    id: 9,
                    name: name.to_string(),
                    role,
                    token_hash: hash.to_string(),
                    created_at: Utc::now(),
                    last_used_at: None,
                    revoked_at: None,
                })
            });

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let token = service
            .register_token(" Newsroom ", Role::Author, "raw-value")
            .await
            .unwrap();

        assert_eq!(token.id, 9);
        assert_ne!(token.token_hash, "raw-value");
    }

    #[tokio::test]
    async fn test_hash_token_secret_matters() {
        let svc1 = AuthService::new(Arc::new(MockTokenRepository::new()), "secret-a".to_string());
        let svc2 = AuthService::new(Arc::new(MockTokenRepository::new()), "secret-b".to_string());

        assert_ne!(svc1.hash_token("token"), svc2.hash_token("token"));
        assert_eq!(svc1.hash_token("token").len(), 64);
    }
}
