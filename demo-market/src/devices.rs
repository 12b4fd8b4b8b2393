use async_trait::async_trait;

use car_market::{
    AuthenticationResult, BiometricError, BiometricOracle, BiometricPrompt, CarouselScroller,
    FeedListing, ScrollError,
};

/// Stand-in for the platform biometric sensor. Behaviour comes from
/// `DEMO_BIOMETRIC`: `pass` (default), `fail` or `none`.
pub(crate) struct EnvBiometricOracle {
    mode: String,
}

impl EnvBiometricOracle {
    pub(crate) fn from_env() -> Self {
        let mode = std::env::var("DEMO_BIOMETRIC").unwrap_or_else(|_| "pass".to_string());
        Self { mode }
    }
}

#[async_trait]
impl BiometricOracle for EnvBiometricOracle {
    async fn has_hardware(&self) -> Result<bool, BiometricError> {
        Ok(self.mode != "none")
    }

    async fn is_enrolled(&self) -> Result<bool, BiometricError> {
        Ok(self.mode != "none")
    }

    async fn authenticate(
        &self,
        prompt: &BiometricPrompt,
    ) -> Result<AuthenticationResult, BiometricError> {
        tracing::info!(
            "Biometric prompt: {} (fallback: {})",
            prompt.prompt_message,
            prompt.fallback_label
        );
        Ok(AuthenticationResult {
            success: self.mode == "pass",
        })
    }
}

/// Prints the carousel item that would be on screen
pub(crate) struct LogScroller {
    pub(crate) items: &'static [FeedListing],
}

#[async_trait]
impl CarouselScroller for LogScroller {
    async fn scroll_to_index(&self, index: usize) -> Result<(), ScrollError> {
        let item = self.items.get(index).ok_or(ScrollError::OutOfRange {
            index,
            len: self.items.len(),
        })?;
        tracing::info!("Carousel shows {} ({})", item.model, item.price);
        Ok(())
    }
}
