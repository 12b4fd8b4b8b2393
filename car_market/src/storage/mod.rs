mod errors;
mod memory;
mod types;

pub use errors::StorageError;
pub use memory::InMemoryKeyValueStore;
pub use types::{SecureKeyValueStore, StoreKey};

/// Encode a boolean the way the session flags are persisted
pub(crate) fn encode_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Anything other than the literal `"true"` reads as false, including absence.
pub(crate) fn decode_flag(value: Option<&str>) -> bool {
    value == Some("true")
}
