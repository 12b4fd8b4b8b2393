mod errors;
mod password;
mod profile;
mod types;

pub use errors::UserError;
pub use profile::ProfileStore;
pub use types::{NewProfile, ProfileSummary, UserProfile};

pub(crate) use password::{hash_password, verify_password};
#[cfg(test)]
pub(crate) use password::hash_password_with_iterations;
