//! Redirect dispatcher: picks the link target of content items on the front end.

use std::sync::Arc;

use crate::domain::entities::{ContentItem, ENABLED_CONTENT_TYPES_KEY, EnabledContentTypes};
use crate::domain::repositories::{LinkMetaRepository, OptionRepository};
use crate::error::AppError;
use crate::utils::url_validator::is_linkable_url;

/// Where a content item's title should link to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub content_id: i64,
    pub title: String,
    pub href: String,
    /// True if `href` is a configured redirect rather than the permalink.
    pub redirected: bool,
}

/// Outcome of a direct request for a content item's permalink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Redirect(String),
    Render,
}

/// Substitutes redirect URLs for permalinks of enabled content types.
///
/// Stored targets outside [`LINK_SCHEMES`](crate::utils::url_validator::LINK_SCHEMES)
/// are never emitted; those items keep their permalink.
pub struct RedirectService<M, O>
where
    M: LinkMetaRepository + ?Sized,
    O: OptionRepository + ?Sized,
{
    links: Arc<M>,
    options: Arc<O>,
}

impl<M, O> RedirectService<M, O>
where
    M: LinkMetaRepository + ?Sized,
    O: OptionRepository + ?Sized,
{
    pub fn new(links: Arc<M>, options: Arc<O>) -> Self {
        Self { links, options }
    }

    /// Resolves the link targets of a listing, reading the settings once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve_all(&self, items: &[ContentItem]) -> Result<Vec<ResolvedLink>, AppError> {
        let enabled = self.enabled_types().await?;

        let mut resolved = Vec::with_capacity(items.len());
        for item in items {
            resolved.push(self.resolve_with(item, enabled.as_ref()).await?);
        }
        Ok(resolved)
    }

    /// Resolves the link target of one item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve_link(&self, item: &ContentItem) -> Result<ResolvedLink, AppError> {
        let enabled = self.enabled_types().await?;
        self.resolve_with(item, enabled.as_ref()).await
    }

    /// Decides whether a permalink request redirects or renders the item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn dispatch(&self, item: &ContentItem) -> Result<Dispatch, AppError> {
        let resolved = self.resolve_link(item).await?;
        if resolved.redirected {
            tracing::debug!(content_id = item.id, target = %resolved.href, "Redirecting permalink");
            Ok(Dispatch::Redirect(resolved.href))
        } else {
            Ok(Dispatch::Render)
        }
    }

    async fn enabled_types(&self) -> Result<Option<EnabledContentTypes>, AppError> {
        Ok(self
            .options
            .get_option(ENABLED_CONTENT_TYPES_KEY)
            .await?
            .map(EnabledContentTypes::from_value))
    }

    async fn resolve_with(
        &self,
        item: &ContentItem,
        enabled: Option<&EnabledContentTypes>,
    ) -> Result<ResolvedLink, AppError> {
        let type_enabled = enabled.is_some_and(|e| e.contains(&item.content_type));

        let redirect = if type_enabled {
            self.links
                .get_url(item.id)
                .await?
                .filter(|url| !url.is_empty())
                .filter(|url| {
                    let linkable = is_linkable_url(url);
                    if !linkable {
                        tracing::warn!(
                            content_id = item.id,
                            target = %url,
                            "Redirect target scheme not allowed, keeping permalink"
                        );
                    }
                    linkable
                })
        } else {
            None
        };

        Ok(match redirect {
            Some(url) => ResolvedLink {
                content_id: item.id,
                title: item.title.clone(),
                href: url,
                redirected: true,
            },
            None => ResolvedLink {
                content_id: item.id,
                title: item.title.clone(),
                href: item.permalink(),
                redirected: false,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockLinkMetaRepository, MockOptionRepository};
    use chrono::Utc;
    use serde_json::json;

    fn item(id: i64, content_type: &str) -> ContentItem {
        ContentItem::new(
            id,
            content_type.to_string(),
            format!("Item {id}"),
            String::new(),
            Utc::now(),
        )
    }

    fn options(stored: Option<serde_json::Value>) -> MockOptionRepository {
        let mut options = MockOptionRepository::new();
        options
            .expect_get_option()
            .returning(move |_| Ok(stored.clone()));
        options
    }

    #[tokio::test]
    async fn test_enabled_type_with_link_redirects() {
        let mut links = MockLinkMetaRepository::new();
        links
            .expect_get_url()
            .returning(|_| Ok(Some("https://example.com/target".to_string())));

        let service = RedirectService::new(Arc::new(links), Arc::new(options(Some(json!(["post"])))));

        let resolved = service.resolve_link(&item(1, "post")).await.unwrap();
        assert!(resolved.redirected);
        assert_eq!(resolved.href, "https://example.com/target");

        let dispatch = service.dispatch(&item(1, "post")).await.unwrap();
        assert_eq!(dispatch, Dispatch::Redirect("https://example.com/target".to_string()));
    }

    #[tokio::test]
    async fn test_disabled_type_keeps_permalink() {
        let mut links = MockLinkMetaRepository::new();
        links.expect_get_url().times(0);

        let service = RedirectService::new(Arc::new(links), Arc::new(options(Some(json!(["book"])))));

        let resolved = service.resolve_link(&item(2, "post")).await.unwrap();
        assert!(!resolved.redirected);
        assert_eq!(resolved.href, "/posts/2");
    }

    #[tokio::test]
    async fn test_empty_link_keeps_permalink() {
        let mut links = MockLinkMetaRepository::new();
        links.expect_get_url().returning(|_| Ok(Some(String::new())));

        let service = RedirectService::new(Arc::new(links), Arc::new(options(Some(json!(["post"])))));

        assert_eq!(
            service.dispatch(&item(3, "post")).await.unwrap(),
            Dispatch::Render
        );
    }

    #[tokio::test]
    async fn test_sentinel_and_missing_settings_disable_everything() {
        for stored in [Some(json!(1)), None] {
            let mut links = MockLinkMetaRepository::new();
            links.expect_get_url().times(0);

            let service = RedirectService::new(Arc::new(links), Arc::new(options(stored)));

            let resolved = service.resolve_link(&item(4, "post")).await.unwrap();
            assert!(!resolved.redirected);
        }
    }

    #[tokio::test]
    async fn test_resolve_all_reads_settings_once() {
        let mut options = MockOptionRepository::new();
        options
            .expect_get_option()
            .times(1)
            .returning(|_| Ok(Some(json!(["post", "book"]))));

        let mut links = MockLinkMetaRepository::new();
        links.expect_get_url().returning(|id| {
            Ok(match id {
                1 => Some("https://one.example".to_string()),
                _ => None,
            })
        });

        let service = RedirectService::new(Arc::new(links), Arc::new(options));

        let resolved = service
            .resolve_all(&[item(1, "post"), item(2, "book"), item(3, "page")])
            .await
            .unwrap();

        let hrefs: Vec<&str> = resolved.iter().map(|r| r.href.as_str()).collect();
        assert_eq!(hrefs, vec!["https://one.example", "/posts/2", "/posts/3"]);
    }

    #[tokio::test]
    async fn test_script_target_falls_back_to_permalink() {
        let mut links = MockLinkMetaRepository::new();
        links
            .expect_get_url()
            .returning(|_| Ok(Some("javascript:alert(1)".to_string())));

        let service = RedirectService::new(Arc::new(links), Arc::new(options(Some(json!(["post"])))));

        let resolved = service.resolve_link(&item(6, "post")).await.unwrap();
        assert!(!resolved.redirected);
        assert_eq!(resolved.href, "/posts/6");

        assert_eq!(
            service.dispatch(&item(6, "post")).await.unwrap(),
            Dispatch::Render
        );
    }
}
