use crate::storage::{SecureKeyValueStore, StoreKey};

use super::errors::UserError;
use super::password::hash_password;
use super::types::{NewProfile, UserProfile};

/// Profile fields kept in the secure store, one entry per field
pub struct ProfileStore;

impl ProfileStore {
    /// Read every profile field. Missing fields stay `None`.
    pub async fn load(store: &dyn SecureKeyValueStore) -> Result<UserProfile, UserError> {
        Ok(UserProfile {
            email: store.get(StoreKey::UserEmail).await?,
            password_record: store.get(StoreKey::UserPassword).await?,
            name: store.get(StoreKey::UserName).await?,
            dob: store.get(StoreKey::UserDob).await?,
            gender: store.get(StoreKey::UserGender).await?,
            profile_image: store.get(StoreKey::ProfileImage).await?,
            gov_id_image: store.get(StoreKey::GovIdImage).await?,
        })
    }

    /// Stored email and password record, for login
    pub async fn credentials(
        store: &dyn SecureKeyValueStore,
    ) -> Result<(Option<String>, Option<String>), UserError> {
        let email = store.get(StoreKey::UserEmail).await?;
        let password_record = store.get(StoreKey::UserPassword).await?;
        Ok((email, password_record))
    }

    pub async fn profile_image(
        store: &dyn SecureKeyValueStore,
    ) -> Result<Option<String>, UserError> {
        Ok(store.get(StoreKey::ProfileImage).await?)
    }

    /// Overwrite every profile field. Nothing from an earlier profile is kept.
    ///
    /// The password is hashed before anything is written, so a hashing
    /// failure leaves the store untouched.
    pub async fn save(
        store: &dyn SecureKeyValueStore,
        profile: &NewProfile,
    ) -> Result<(), UserError> {
        let password_record = hash_password(&profile.password)?;

        store.set(StoreKey::UserEmail, &profile.email).await?;
        store.set(StoreKey::UserPassword, &password_record).await?;
        store.set(StoreKey::UserName, &profile.name).await?;
        store.set(StoreKey::UserDob, &profile.dob).await?;
        store.set(StoreKey::UserGender, &profile.gender).await?;
        store
            .set(StoreKey::ProfileImage, &profile.profile_image)
            .await?;
        store.set(StoreKey::GovIdImage, &profile.gov_id_image).await?;

        tracing::debug!("Stored profile for {}", profile.email);
        Ok(())
    }
}
