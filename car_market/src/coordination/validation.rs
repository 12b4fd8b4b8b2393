use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::navigation::Notice;

pub(crate) const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Shape only. 2024-13-99 passes.
static DOB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("dob pattern is valid"));

/// Form input problems, in the order they are checked
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing login fields")]
    MissingLoginFields,

    #[error("Missing registration fields or images")]
    MissingRegistrationFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Date of birth is not YYYY-MM-DD")]
    InvalidDob,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    pub fn notice(&self) -> Notice {
        match self {
            Self::MissingLoginFields => Notice::new("Error", "Please fill in all fields."),
            Self::MissingRegistrationFields => Notice::new(
                "Error",
                "Please fill in all fields and upload required images.",
            ),
            Self::InvalidEmail => {
                Notice::new("Invalid Email", "Please enter a valid email address.")
            }
            Self::InvalidDob => Notice::new("Invalid DOB", "Please enter DOB in YYYY-MM-DD format."),
            Self::WeakPassword => Notice::new(
                "Weak Password",
                "Password must be at least 6 characters.",
            ),
            Self::PasswordMismatch => Notice::new("Mismatch", "Passwords do not match."),
        }
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub(crate) fn is_valid_dob(dob: &str) -> bool {
    DOB_PATTERN.is_match(dob)
}

/// Length is counted in UTF-16 code units, as the platform text field reports it
pub(crate) fn is_strong_enough(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
}
