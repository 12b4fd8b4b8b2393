use crate::navigation::{Notice, Route, Transition};
use crate::session::clear_session;
use crate::storage::SecureKeyValueStore;
use crate::userdb::{ProfileStore, ProfileSummary};

use super::errors::CoordinationError;

/// Name, email and avatar for the settings screen
pub async fn load_profile_summary_core(
    store: &dyn SecureKeyValueStore,
) -> Result<ProfileSummary, CoordinationError> {
    let profile = ProfileStore::load(store).await?;
    Ok(ProfileSummary::from(profile))
}

/// "Update Profile" row: registration overwrites every profile field
pub fn update_profile() -> Transition {
    Transition::push(Route::register())
}

/// Forget the session and the whole profile, then return to the
/// login/register choice
pub async fn handle_logout_core(
    store: &dyn SecureKeyValueStore,
) -> Result<Transition, CoordinationError> {
    clear_session(store).await?;
    tracing::info!("User logged out");
    Ok(Transition::replace(Route::AuthOptions)
        .with_notice(Notice::new("Logged out", "You have been logged out.")))
}
