use serde::Deserialize;

use crate::navigation::{Notice, Route, Transition};
use crate::session::mark_authenticated;
use crate::storage::SecureKeyValueStore;
use crate::userdb::{NewProfile, ProfileStore};

use super::errors::CoordinationError;
use super::validation::{ValidationError, is_strong_enough, is_valid_dob, is_valid_email};

/// Everything the registration screen collects
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub dob: String,
    pub gender: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub profile_image: Option<String>,
    pub gov_id_image: Option<String>,
    /// Where the user was headed before being sent to register
    pub redirect_to: Option<String>,
}

impl RegistrationForm {
    /// Run the checks in order and stop at the first failure
    pub fn validate(&self) -> Result<NewProfile, ValidationError> {
        let profile_image = self.profile_image.as_deref().filter(|s| !s.is_empty());
        let gov_id_image = self.gov_id_image.as_deref().filter(|s| !s.is_empty());

        let (Some(profile_image), Some(gov_id_image)) = (profile_image, gov_id_image) else {
            return Err(ValidationError::MissingRegistrationFields);
        };
        if [
            &self.name,
            &self.dob,
            &self.gender,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.is_empty())
        {
            return Err(ValidationError::MissingRegistrationFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_dob(&self.dob) {
            return Err(ValidationError::InvalidDob);
        }
        if !is_strong_enough(&self.password) {
            return Err(ValidationError::WeakPassword);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(NewProfile {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            dob: self.dob.clone(),
            gender: self.gender.clone(),
            profile_image: profile_image.to_string(),
            gov_id_image: gov_id_image.to_string(),
        })
    }

    /// The car details page to resume, if the form carries a usable one
    fn resume_route(&self) -> Option<Route> {
        let path = self.redirect_to.as_deref()?;
        match Route::parse(path) {
            Ok(route @ Route::CarDetails { .. }) => Some(route),
            Ok(route) => {
                tracing::debug!("Ignoring redirect to {} after registration", route);
                None
            }
            Err(e) => {
                tracing::warn!("Ignoring unparsable redirect {:?}: {}", path, e);
                None
            }
        }
    }
}

/// Validate the form, then replace any stored profile with it and mark the
/// session logged in and verified.
///
/// Nothing is written unless every check passes. The user lands on the
/// car they were trying to open, or on home.
pub async fn handle_register_core(
    store: &dyn SecureKeyValueStore,
    form: &RegistrationForm,
) -> Result<Transition, CoordinationError> {
    let profile = form.validate()?;

    ProfileStore::save(store, &profile).await?;
    mark_authenticated(store).await?;
    tracing::info!("Registered new account");

    let destination = form.resume_route().unwrap_or(Route::Home);
    Ok(Transition::replace(destination)
        .with_notice(Notice::title_only("Registration Successful")))
}
