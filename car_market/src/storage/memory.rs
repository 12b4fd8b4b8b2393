use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::errors::StorageError;
use super::types::{SecureKeyValueStore, StoreKey};

/// Process-local store, used by the demo and by tests in place of the
/// platform keychain.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entry: Mutex<HashMap<&'static str, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory secure key-value store");
        Self::default()
    }

    /// Number of keys currently present
    pub async fn len(&self) -> usize {
        self.entry.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entry.lock().await.is_empty()
    }
}

#[async_trait]
impl SecureKeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        Ok(self.entry.lock().await.get(key.as_str()).cloned())
    }

    async fn set(&self, key: StoreKey, value: &str) -> Result<(), StorageError> {
        self.entry
            .lock()
            .await
            .insert(key.as_str(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: StoreKey) -> Result<(), StorageError> {
        self.entry.lock().await.remove(key.as_str());
        Ok(())
    }
}
