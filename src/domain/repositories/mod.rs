//! Repository trait definitions for the domain layer.
//!
//! The traits abstract every piece of host-platform storage this service
//! touches. Implementations live in `crate::infrastructure::persistence`
//! (PostgreSQL) and `crate::infrastructure::memory` (in-process). Mock
//! implementations are generated with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkMetaRepository`] - Per-content redirect URL
//! - [`OptionRepository`] - Site settings
//! - [`ContentTypeRepository`] - Content type registry
//! - [`ContentRepository`] - Content items
//! - [`TokenRepository`] - Access tokens
//! - [`StoreHealth`] - Backend connectivity probe

pub mod content_repository;
pub mod content_type_repository;
pub mod link_meta_repository;
pub mod option_repository;
pub mod store_health;
pub mod token_repository;

pub use content_repository::ContentRepository;
pub use content_type_repository::ContentTypeRepository;
pub use link_meta_repository::LinkMetaRepository;
pub use option_repository::OptionRepository;
pub use store_health::StoreHealth;
pub use token_repository::TokenRepository;

#[cfg(test)]
pub use content_repository::MockContentRepository;
#[cfg(test)]
pub use content_type_repository::MockContentTypeRepository;
#[cfg(test)]
pub use link_meta_repository::MockLinkMetaRepository;
#[cfg(test)]
pub use option_repository::MockOptionRepository;
#[cfg(test)]
pub use store_health::MockStoreHealth;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
