mod errors;
mod types;

pub use errors::BiometricError;
pub use types::{AuthenticationResult, BiometricOracle, BiometricPrompt};
