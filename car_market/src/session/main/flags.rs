use crate::session::errors::SessionError;
use crate::storage::{SecureKeyValueStore, StoreKey, encode_flag};

/// Mark the stored session as logged in and verified
pub async fn mark_authenticated(store: &dyn SecureKeyValueStore) -> Result<(), SessionError> {
    store
        .set(StoreKey::IsLoggedIn, encode_flag(true))
        .await?;
    store
        .set(StoreKey::IsVerified, encode_flag(true))
        .await?;
    Ok(())
}

/// Delete the session flags and every profile field.
///
/// Keys are deleted one by one; a failure part way leaves the remaining
/// keys in place and is returned to the caller.
pub async fn clear_session(store: &dyn SecureKeyValueStore) -> Result<(), SessionError> {
    for key in StoreKey::ALL {
        store.delete(key).await?;
    }
    tracing::info!("Cleared session and profile from secure store");
    Ok(())
}
