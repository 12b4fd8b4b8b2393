//! Test doubles shared by the unit tests in this crate

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::biometric::{AuthenticationResult, BiometricError, BiometricOracle, BiometricPrompt};
use crate::storage::{InMemoryKeyValueStore, SecureKeyValueStore, StorageError, StoreKey};

/// Oracle with fixed answers that counts how often the prompt was shown
pub(crate) struct ScriptedOracle {
    has_hardware: bool,
    enrolled: bool,
    success: bool,
    faulty: bool,
    prompts: AtomicUsize,
}

impl ScriptedOracle {
    fn new(has_hardware: bool, enrolled: bool, success: bool) -> Self {
        Self {
            has_hardware,
            enrolled,
            success,
            faulty: false,
            prompts: AtomicUsize::new(0),
        }
    }

    pub(crate) fn passing() -> Self {
        Self::new(true, true, true)
    }

    pub(crate) fn rejecting() -> Self {
        Self::new(true, true, false)
    }

    pub(crate) fn no_hardware() -> Self {
        Self::new(false, false, true)
    }

    pub(crate) fn not_enrolled() -> Self {
        Self::new(true, false, true)
    }

    pub(crate) fn faulty() -> Self {
        Self {
            faulty: true,
            ..Self::passing()
        }
    }

    pub(crate) fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BiometricOracle for ScriptedOracle {
    async fn has_hardware(&self) -> Result<bool, BiometricError> {
        if self.faulty {
            return Err(BiometricError::Sensor("sensor offline".to_string()));
        }
        Ok(self.has_hardware)
    }

    async fn is_enrolled(&self) -> Result<bool, BiometricError> {
        Ok(self.enrolled)
    }

    async fn authenticate(
        &self,
        _prompt: &BiometricPrompt,
    ) -> Result<AuthenticationResult, BiometricError> {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        Ok(AuthenticationResult {
            success: self.success,
        })
    }
}

/// Store that reads from an inner store but refuses every write
pub(crate) struct ReadOnlyStore {
    pub(crate) inner: InMemoryKeyValueStore,
}

impl ReadOnlyStore {
    pub(crate) fn new() -> Self {
        Self {
            inner: InMemoryKeyValueStore::new(),
        }
    }
}

#[async_trait]
impl SecureKeyValueStore for ReadOnlyStore {
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: StoreKey, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(format!("write to {key} refused")))
    }

    async fn delete(&self, key: StoreKey) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(format!("delete of {key} refused")))
    }
}
