use serde::{Deserialize, Serialize};

/// Profile fields as found in the store. Any subset may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: Option<String>,
    /// Salted password record, never the password itself
    #[serde(skip_serializing)]
    pub password_record: Option<String>,
    pub name: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub profile_image: Option<String>,
    pub gov_id_image: Option<String>,
}

/// A complete profile ready to be written by registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub email: String,
    pub password: String,
    pub name: String,
    pub dob: String,
    pub gender: String,
    pub profile_image: String,
    pub gov_id_image: String,
}

/// What the settings screen shows about the current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
}

const NOT_AVAILABLE: &str = "N/A";

impl From<UserProfile> for ProfileSummary {
    fn from(profile: UserProfile) -> Self {
        Self {
            name: non_empty_or_na(profile.name),
            email: non_empty_or_na(profile.email),
            profile_image: profile.profile_image.filter(|s| !s.is_empty()),
        }
    }
}

fn non_empty_or_na(value: Option<String>) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
