//! In-process repository implementations.
//!
//! Used when no database is configured and by the integration tests. State
//! lives for the lifetime of the process.

pub mod memory_content_repository;
pub mod memory_link_meta_repository;
pub mod memory_option_repository;
pub mod memory_token_repository;

pub use memory_content_repository::{MemoryContentRepository, MemoryContentTypeRepository};
pub use memory_link_meta_repository::MemoryLinkMetaRepository;
pub use memory_option_repository::MemoryOptionRepository;
pub use memory_token_repository::MemoryTokenRepository;

use async_trait::async_trait;

use crate::domain::repositories::StoreHealth;
use crate::error::AppError;

/// Health probe of the in-process store. Always reachable.
pub struct MemoryStoreHealth;

#[async_trait]
impl StoreHealth for MemoryStoreHealth {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
