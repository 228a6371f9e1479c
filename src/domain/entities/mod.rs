//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`RedirectLink`] - Redirect target of one content item
//! - [`EnabledContentTypes`] - Site-wide selection of participating content types
//! - [`ContentType`] - A registered content type
//! - [`ContentItem`] - A post or custom-type item
//! - [`Caller`] / [`AccessToken`] - Authenticated identities
//!
//! Creation inputs use separate `New*` structs validated with `validator`.

pub mod caller;
pub mod content_item;
pub mod content_type;
pub mod enabled_content_types;
pub mod redirect_link;

pub use caller::{AccessToken, Caller, Role, UnknownRole};
pub use content_item::{ContentItem, NewContentItem};
pub use content_type::{BASE_CONTENT_TYPE, ContentType, NewContentType};
pub use enabled_content_types::{ENABLED_CONTENT_TYPES_KEY, EnabledContentTypes};
pub use redirect_link::{REDIRECT_URL_META_KEY, RedirectLink};
