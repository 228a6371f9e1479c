//! Connectivity probe for the backing store.

use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Short backend name for health reports.
    fn backend(&self) -> &'static str;

    async fn ping(&self) -> Result<(), AppError>;
}
