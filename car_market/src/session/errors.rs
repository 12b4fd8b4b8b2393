use thiserror::Error;

use crate::storage::StorageError;

use super::main::LaunchState;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Not logged in and verified")]
    Unauthenticated,

    #[error("Invalid launch transition from {0:?}")]
    InvalidTransition(LaunchState),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SessionError::Unauthenticated.to_string(),
            "Not logged in and verified"
        );
        assert_eq!(
            SessionError::InvalidTransition(LaunchState::Home).to_string(),
            "Invalid launch transition from Home"
        );
        assert_eq!(
            SessionError::Storage(StorageError::Storage("x".to_string())).to_string(),
            "Storage error: Storage error: x"
        );
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<SessionError>();
    }
}
