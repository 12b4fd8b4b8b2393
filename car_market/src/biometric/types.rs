use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{BIOMETRIC_FALLBACK_LABEL, BIOMETRIC_PROMPT_MESSAGE};

use super::errors::BiometricError;

/// Texts shown by the platform biometric prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricPrompt {
    pub prompt_message: String,
    pub fallback_label: String,
}

impl Default for BiometricPrompt {
    fn default() -> Self {
        Self {
            prompt_message: BIOMETRIC_PROMPT_MESSAGE.clone(),
            fallback_label: BIOMETRIC_FALLBACK_LABEL.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    pub success: bool,
}

/// Platform biometric sensor, treated as an opaque yes/no decision provider
#[async_trait]
pub trait BiometricOracle: Send + Sync + 'static {
    /// Whether the device has a biometric sensor at all
    async fn has_hardware(&self) -> Result<bool, BiometricError>;

    /// Whether the user has enrolled a face or fingerprint
    async fn is_enrolled(&self) -> Result<bool, BiometricError>;

    /// Show the prompt and wait for the user's answer
    async fn authenticate(
        &self,
        prompt: &BiometricPrompt,
    ) -> Result<AuthenticationResult, BiometricError>;
}
