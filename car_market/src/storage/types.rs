use async_trait::async_trait;

use super::errors::StorageError;

/// The keys the application reads and writes in the secure store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    UserEmail,
    UserPassword,
    UserName,
    UserDob,
    UserGender,
    ProfileImage,
    GovIdImage,
    IsLoggedIn,
    IsVerified,
}

impl StoreKey {
    /// Every key, in the order logout deletes them.
    pub const ALL: [StoreKey; 9] = [
        StoreKey::IsLoggedIn,
        StoreKey::IsVerified,
        StoreKey::UserEmail,
        StoreKey::UserPassword,
        StoreKey::UserName,
        StoreKey::UserDob,
        StoreKey::UserGender,
        StoreKey::ProfileImage,
        StoreKey::GovIdImage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::UserEmail => "user_email",
            StoreKey::UserPassword => "user_password",
            StoreKey::UserName => "user_name",
            StoreKey::UserDob => "user_dob",
            StoreKey::UserGender => "user_gender",
            StoreKey::ProfileImage => "profile_image",
            StoreKey::GovIdImage => "gov_id_image",
            StoreKey::IsLoggedIn => "isLoggedIn",
            StoreKey::IsVerified => "isVerified",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform secure key-value store.
///
/// Implementations wrap whatever the host platform provides (keychain,
/// keystore, ...). Calls are issued one at a time by each flow; the store
/// gives no transactional guarantees and the last write wins.
#[async_trait]
pub trait SecureKeyValueStore: Send + Sync + 'static {
    /// Read a value. `Ok(None)` means the key is not present.
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: StoreKey, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing an absent key is not an error.
    async fn delete(&self, key: StoreKey) -> Result<(), StorageError>;
}
