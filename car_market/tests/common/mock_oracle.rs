use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use car_market::{AuthenticationResult, BiometricError, BiometricOracle, BiometricPrompt};

/// Biometric oracle with scripted answers
pub struct MockOracle {
    pub has_hardware: bool,
    pub enrolled: bool,
    pub accept: bool,
    pub fail_prompt: bool,
    prompts: AtomicUsize,
}

impl MockOracle {
    pub fn new(has_hardware: bool, enrolled: bool, accept: bool) -> Self {
        Self {
            has_hardware,
            enrolled,
            accept,
            fail_prompt: false,
            prompts: AtomicUsize::new(0),
        }
    }

    pub fn accepting() -> Self {
        Self::new(true, true, true)
    }

    pub fn rejecting() -> Self {
        Self::new(true, true, false)
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BiometricOracle for MockOracle {
    async fn has_hardware(&self) -> Result<bool, BiometricError> {
        Ok(self.has_hardware)
    }

    async fn is_enrolled(&self) -> Result<bool, BiometricError> {
        Ok(self.enrolled)
    }

    async fn authenticate(
        &self,
        prompt: &BiometricPrompt,
    ) -> Result<AuthenticationResult, BiometricError> {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        assert!(!prompt.prompt_message.is_empty());
        if self.fail_prompt {
            return Err(BiometricError::Prompt("system cancelled".to_string()));
        }
        Ok(AuthenticationResult {
            success: self.accept,
        })
    }
}
