//! Content item entity (a post or custom-type equivalent).

use chrono::{DateTime, Utc};
use validator::Validate;

/// A unit of publishable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: i64,
    pub content_type: String,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn new(
        id: i64,
        content_type: String,
        title: String,
        body: String,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content_type,
            title,
            body,
            published_at,
        }
    }

    /// Canonical front-end URL of this item.
    pub fn permalink(&self) -> String {
        format!("/posts/{}", self.id)
    }
}

/// Input data for creating a content item.
#[derive(Debug, Clone, Validate)]
pub struct NewContentItem {
    #[validate(length(min = 1, max = 20, message = "Content type slug must be 1-20 characters"))]
    pub content_type: String,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub body: String,
}
