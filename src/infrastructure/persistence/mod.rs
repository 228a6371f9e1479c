//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgLinkMetaRepository`] - Redirect URL per content item
//! - [`PgOptionRepository`] - Site settings (JSONB)
//! - [`PgContentTypeRepository`] - Content type registry
//! - [`PgContentRepository`] - Content items
//! - [`PgTokenRepository`] - Access token storage and validation
//! - [`PgStoreHealth`] - Connectivity probe

pub mod pg_content_repository;
pub mod pg_content_type_repository;
pub mod pg_link_meta_repository;
pub mod pg_option_repository;
pub mod pg_store_health;
pub mod pg_token_repository;

pub use pg_content_repository::PgContentRepository;
pub use pg_content_type_repository::PgContentTypeRepository;
pub use pg_link_meta_repository::PgLinkMetaRepository;
pub use pg_option_repository::PgOptionRepository;
pub use pg_store_health::PgStoreHealth;
pub use pg_token_repository::PgTokenRepository;
