use async_trait::async_trait;
use tokio::sync::RwLock;

use super::RecordStore;
use crate::error::StoreError;
use crate::resource::{Resource, Stored};

/// In-process store. Records live for the lifetime of the process.
pub struct MemoryStore<R> {
    records: RwLock<Vec<Stored<R>>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        MemoryStore {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> RecordStore<R> for MemoryStore<R> {
    async fn insert(&self, record: R) -> Result<Stored<R>, StoreError> {
        let mut records = self.records.write().await;
        let stored = Stored {
            id: records.len() as u64 + 1,
            record,
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Stored<R>>, StoreError> {
        Ok(self.records.read().await.clone())
    }
}
