mod dynamo;
mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::resource::{Resource, Stored};

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

/// Persistence for one record type. Identifiers are assigned by the store.
#[async_trait]
pub trait RecordStore<R: Resource>: Send + Sync {
    /// Stores `record` under the next identifier and returns it.
    async fn insert(&self, record: R) -> Result<Stored<R>, StoreError>;

    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<Stored<R>>, StoreError>;
}
