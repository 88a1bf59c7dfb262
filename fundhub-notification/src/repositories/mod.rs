//! Store ports and their diesel-async MySQL adapters.

mod fund_repository;
mod notification_repository;

pub use fund_repository::*;
pub use notification_repository::*;

use async_trait::async_trait;

use fundhub_shared::clients::db::{DbPool, StoreError};

/// Reachability check used by `/health`.
#[async_trait]
pub trait StoreProbe: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
impl StoreProbe for DbPool {
    async fn ping(&self) -> Result<(), StoreError> {
        DbPool::ping(self).await
    }
}
