//! Error types for the coordination layer

use thiserror::Error;

use crate::navigation::{NavigationError, Notice};
use crate::session::SessionError;
use crate::userdb::UserError;

use super::validation::ValidationError;

/// Errors that can occur while running a user flow
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// Form input rejected before anything was written
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// Email or password did not match the stored account.
    /// Deliberately does not say which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Screen needs a logged in and verified session
    #[error("Unauthorized access")]
    Unauthorized,

    /// Resource not found with context
    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),

    /// Error from profile operations
    #[error("User error: {0}")]
    UserError(UserError),

    /// Error from navigation
    #[error("Navigation error: {0}")]
    NavigationError(NavigationError),
}

impl CoordinationError {
    /// Log the error and return self
    ///
    /// This method logs the error with appropriate context and returns self,
    /// allowing for method chaining and explicit logging when needed.
    pub fn log(self) -> Self {
        match &self {
            Self::Validation(err) => tracing::error!("Validation error: {}", err),
            Self::InvalidCredentials => tracing::error!("Invalid credentials"),
            Self::Unauthorized => tracing::error!("Unauthorized access"),
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::error!("Resource not found: {} {}", resource_type, resource_id),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::NavigationError(err) => tracing::error!("Navigation error: {}", err),
        }
        self
    }

    /// The alert to show for this error, if the user is meant to see one.
    ///
    /// Store and session faults have no designed notice and return `None`.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Validation(err) => Some(err.notice()),
            Self::InvalidCredentials => Some(Notice::new(
                "Invalid Credentials",
                "Email or password is incorrect.",
            )),
            _ => None,
        }
    }
}

// Custom From implementations that automatically log errors

impl From<ValidationError> for CoordinationError {
    fn from(err: ValidationError) -> Self {
        let error = Self::Validation(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = Self::UserError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<NavigationError> for CoordinationError {
    fn from(err: NavigationError) -> Self {
        let error = Self::NavigationError(err);
        tracing::error!("{}", error);
        error
    }
}
