//! Content type entity (`post`, `page`, custom types).

use regex::Regex;
use std::sync::LazyLock;
use validator::Validate;

/// Slug of the base content type. It is always listed first on the settings
/// page and is the only type that gets the link meta box.
pub const BASE_CONTENT_TYPE: &str = "post";

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("valid slug regex"));

/// A registered content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    pub id: i64,
    pub slug: String,
    pub label: String,
    pub public: bool,
    pub builtin: bool,
}

impl ContentType {
    pub fn new(id: i64, slug: String, label: String, public: bool, builtin: bool) -> Self {
        Self {
            id,
            slug,
            label,
            public,
            builtin,
        }
    }

    /// Public, non-builtin types are the "custom" types offered on the
    /// settings page after the base type.
    pub fn is_public_custom(&self) -> bool {
        self.public && !self.builtin
    }
}

/// Input data for registering a content type.
#[derive(Debug, Clone, Validate)]
pub struct NewContentType {
    #[validate(
        length(min = 1, max = 20, message = "Slug must be 1-20 characters"),
        regex(
            path = *SLUG_PATTERN,
            message = "Slug may contain lowercase letters, digits, '-' and '_'"
        )
    )]
    pub slug: String,

    #[validate(length(min = 1, max = 100, message = "Label must be 1-100 characters"))]
    pub label: String,

    pub public: bool,
    pub builtin: bool,
}
