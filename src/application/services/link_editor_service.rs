//! Link editor: reads and saves the redirect URL of a content item.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{BASE_CONTENT_TYPE, ContentItem};
use crate::domain::repositories::LinkMetaRepository;
use crate::error::{AppError, PERMISSION_DENIED_MESSAGE};
use crate::utils::sanitize::sanitize_text_field;
use crate::utils::url_validator::is_valid_url;

/// Nonce action protecting the link field.
pub const LINK_NONCE_ACTION: &str = "vk-ltc-link";
/// Form field carrying the redirect URL.
pub const LINK_FIELD: &str = "vk-ltc-link-field";
/// Form field carrying the link nonce.
pub const LINK_NONCE_FIELD: &str = "vk-ltc-link-nonce";

/// Service owning the per-item redirect URL.
pub struct LinkEditorService<M: LinkMetaRepository + ?Sized> {
    repository: Arc<M>,
}

impl<M: LinkMetaRepository + ?Sized> LinkEditorService<M> {
    pub fn new(repository: Arc<M>) -> Self {
        Self { repository }
    }

    /// Whether the edit screen of `item` offers the link field.
    ///
    /// Only items of the base content type get the field, whatever the
    /// settings page says.
    pub fn meta_box_visible(&self, item: &ContentItem, caller_can_link: bool) -> bool {
        caller_can_link && item.content_type == BASE_CONTENT_TYPE
    }

    /// Current redirect URL of an item, empty if none was saved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn current_url(&self, content_id: i64) -> Result<String, AppError> {
        Ok(self
            .repository
            .get_url(content_id)
            .await?
            .unwrap_or_default())
    }

    /// Fails with [`AppError::Forbidden`] unless the caller may edit links.
    ///
    /// Runs before anything else about `content_id` is looked up.
    pub fn ensure_can_link(&self, content_id: i64, caller_can_link: bool) -> Result<(), AppError> {
        if caller_can_link {
            return Ok(());
        }
        warn!(content_id, "Link save rejected: missing capability");
        Err(AppError::forbidden(
            PERMISSION_DENIED_MESSAGE,
            json!({ "content_id": content_id }),
        ))
    }

    /// Save hook for the link field.
    ///
    /// # Flow
    ///
    /// 1. Caller without the link capability: [`AppError::Forbidden`], nothing stored
    /// 2. Field absent or nonce invalid: nothing stored, `content_id` returned
    /// 3. The field is sanitized; an empty value or a valid URL is stored
    /// 4. Anything else is dropped without an error
    ///
    /// Returns `content_id` in every non-error case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] for callers without the capability.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn save_link(
        &self,
        content_id: i64,
        submitted_url: Option<&str>,
        caller_can_link: bool,
        nonce_valid: bool,
    ) -> Result<i64, AppError> {
        self.ensure_can_link(content_id, caller_can_link)?;

        let Some(submitted) = submitted_url else {
            debug!(content_id, "No link field submitted");
            return Ok(content_id);
        };

        if !nonce_valid {
            warn!(content_id, "Link save skipped: missing or invalid nonce");
            return Ok(content_id);
        }

        let link = sanitize_text_field(submitted);

        if link.is_empty() || is_valid_url(&link) {
            self.repository.put_url(content_id, &link).await?;
            info!(content_id, url = %link, "Redirect link saved");
        } else {
            warn!(content_id, candidate = %link, "Redirect link rejected: not a URL");
        }

        Ok(content_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkMetaRepository;
    use chrono::Utc;

    fn item(content_type: &str) -> ContentItem {
        ContentItem::new(
            5,
            content_type.to_string(),
            "Title".to_string(),
            String::new(),
            Utc::now(),
        )
    }

    #[test]
    fn test_meta_box_only_for_base_type() {
        let service = LinkEditorService::new(Arc::new(MockLinkMetaRepository::new()));

        assert!(service.meta_box_visible(&item("post"), true));
        assert!(!service.meta_box_visible(&item("post"), false));
        assert!(!service.meta_box_visible(&item("book"), true));
        assert!(!service.meta_box_visible(&item("page"), true));
    }

    #[tokio::test]
    async fn test_current_url_defaults_to_empty() {
        let mut repo = MockLinkMetaRepository::new();
        repo.expect_get_url().returning(|_| Ok(None));

        let service = LinkEditorService::new(Arc::new(repo));

        assert_eq!(service.current_url(5).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_save_valid_url() {
        let mut repo = MockLinkMetaRepository::new();
        repo.expect_put_url()
            .withf(|id, url| *id == 5 && url == "https://example.com/landing")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkEditorService::new(Arc::new(repo));

        let result = service
            .save_link(5, Some("  https://example.com/landing "), true, true)
            .await;

        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_save_empty_clears_link() {
        let mut repo = MockLinkMetaRepository::new();
        repo.expect_put_url()
            .withf(|_, url| url.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkEditorService::new(Arc::new(repo));

        assert_eq!(service.save_link(5, Some("   "), true, true).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_invalid_url_is_not_saved_but_succeeds() {
        let mut repo = MockLinkMetaRepository::new();
        repo.expect_put_url().times(0);

        let service = LinkEditorService::new(Arc::new(repo));

        for candidate in ["example.com", "http://", "http:///x", "http://:80"] {
            assert_eq!(
                service.save_link(5, Some(candidate), true, true).await.unwrap(),
                5
            );
        }
    }

    #[tokio::test]
    async fn test_permission_denied_leaves_state() {
        let mut repo = MockLinkMetaRepository::new();
        repo.expect_put_url().times(0);

        let service = LinkEditorService::new(Arc::new(repo));

        let result = service
            .save_link(5, Some("https://example.com"), false, true)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_invalid_nonce_skips_silently() {
        let mut repo = MockLinkMetaRepository::new();
        repo.expect_put_url().times(0);

        let service = LinkEditorService::new(Arc::new(repo));

        let result = service
            .save_link(5, Some("https://x.com"), true, false)
            .await;

        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_missing_field_skips_silently() {
        let mut repo = MockLinkMetaRepository::new();
        repo.expect_put_url().times(0);

        let service = LinkEditorService::new(Arc::new(repo));

        assert_eq!(service.save_link(5, None, true, true).await.unwrap(), 5);
    }

    #[test]
    fn test_ensure_can_link() {
        let service = LinkEditorService::new(Arc::new(MockLinkMetaRepository::new()));

        assert!(service.ensure_can_link(5, true).is_ok());
        assert!(matches!(
            service.ensure_can_link(999, false).unwrap_err(),
            AppError::Forbidden { .. }
        ));
    }
}
