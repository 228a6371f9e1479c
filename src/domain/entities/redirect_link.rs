//! Redirect link entity: the per-content-item target URL.

/// Metadata key under which the redirect URL of a content item is stored.
pub const REDIRECT_URL_META_KEY: &str = "vk-ltc-url";

/// Redirect target attached to a content item.
///
/// An empty `url` means no redirect is configured and the item keeps linking
/// to its own permalink. A non-empty `url` passed validation when it was
/// written; it is never re-validated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectLink {
    pub content_id: i64,
    pub url: String,
}

impl RedirectLink {
    pub fn new(content_id: i64, url: impl Into<String>) -> Self {
        Self {
            content_id,
            url: url.into(),
        }
    }

    /// Returns true if a redirect target is set.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}
