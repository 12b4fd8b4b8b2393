use thiserror::Error;

use crate::storage::StorageError;
use crate::utils::UtilError;

#[derive(Clone, Error, Debug)]
pub enum UserError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Password hashing error: {0}")]
    Hashing(String),

    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
