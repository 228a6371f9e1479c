//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete storage backends.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`memory`] - In-process fallback used without a database

pub mod memory;
pub mod persistence;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{
    ContentRepository, ContentTypeRepository, LinkMetaRepository, OptionRepository, StoreHealth,
    TokenRepository,
};

/// One backend's worth of repositories, picked at startup.
#[derive(Clone)]
pub struct Repositories {
    pub tokens: Arc<dyn TokenRepository>,
    pub options: Arc<dyn OptionRepository>,
    pub content_types: Arc<dyn ContentTypeRepository>,
    pub content: Arc<dyn ContentRepository>,
    pub link_meta: Arc<dyn LinkMetaRepository>,
    pub health: Arc<dyn StoreHealth>,
}

impl Repositories {
    /// Repositories backed by PostgreSQL.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            tokens: Arc::new(persistence::PgTokenRepository::new(pool.clone())),
            options: Arc::new(persistence::PgOptionRepository::new(pool.clone())),
            content_types: Arc::new(persistence::PgContentTypeRepository::new(pool.clone())),
            content: Arc::new(persistence::PgContentRepository::new(pool.clone())),
            link_meta: Arc::new(persistence::PgLinkMetaRepository::new(pool.clone())),
            health: Arc::new(persistence::PgStoreHealth::new(pool)),
        }
    }

    /// Fresh, empty in-process repositories.
    pub fn in_memory() -> Self {
        Self {
            tokens: Arc::new(memory::MemoryTokenRepository::new()),
            options: Arc::new(memory::MemoryOptionRepository::new()),
            content_types: Arc::new(memory::MemoryContentTypeRepository::new()),
            content: Arc::new(memory::MemoryContentRepository::new()),
            link_meta: Arc::new(memory::MemoryLinkMetaRepository::new()),
            health: Arc::new(memory::MemoryStoreHealth),
        }
    }
}
