use serde::{Deserialize, Serialize};

use crate::storage::{SecureKeyValueStore, StoreKey, decode_flag};

use super::errors::SessionError;

/// Persisted markers gating the authenticated screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFlags {
    pub is_logged_in: bool,
    pub is_verified: bool,
}

impl SessionFlags {
    pub fn is_authenticated(&self) -> bool {
        self.is_logged_in && self.is_verified
    }
}

/// Session state as read at the start of a navigation.
///
/// Flows receive a context instead of querying the store themselves, so
/// one screen sees one consistent view of the flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub flags: SessionFlags,
}

impl SessionContext {
    pub async fn load(store: &dyn SecureKeyValueStore) -> Result<Self, SessionError> {
        let is_logged_in = store.get(StoreKey::IsLoggedIn).await?;
        let is_verified = store.get(StoreKey::IsVerified).await?;

        let flags = SessionFlags {
            is_logged_in: decode_flag(is_logged_in.as_deref()),
            is_verified: decode_flag(is_verified.as_deref()),
        };
        tracing::trace!("Loaded session flags: {:?}", flags);

        Ok(Self { flags })
    }

    pub fn is_authenticated(&self) -> bool {
        self.flags.is_authenticated()
    }

    pub fn require_authenticated(&self) -> Result<(), SessionError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(SessionError::Unauthenticated)
        }
    }
}
