use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::navigation::{Notice, Route, Transition};
use crate::session::mark_authenticated;
use crate::storage::SecureKeyValueStore;
use crate::userdb::{ProfileStore, verify_password};

use super::errors::CoordinationError;
use super::validation::ValidationError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Check the submitted credentials against the stored account and, on a
/// match, mark the session logged in and verified.
///
/// A missing account and a wrong password produce the same error.
pub async fn handle_login_core(
    store: &dyn SecureKeyValueStore,
    request: &LoginRequest,
) -> Result<Transition, CoordinationError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ValidationError::MissingLoginFields.into());
    }

    let (stored_email, stored_record) = ProfileStore::credentials(store).await?;

    let email_matches = stored_email
        .as_deref()
        .is_some_and(|stored| bool::from(stored.as_bytes().ct_eq(request.email.as_bytes())));
    let password_matches = stored_record
        .as_deref()
        .is_some_and(|record| verify_password(&request.password, record));

    if !(email_matches && password_matches) {
        tracing::debug!("Login rejected for {}", request.email);
        return Err(CoordinationError::InvalidCredentials.log());
    }

    mark_authenticated(store).await?;
    tracing::info!("User logged in");

    Ok(Transition::replace(Route::Home).with_notice(Notice::title_only("Login Successful")))
}
