use crate::biometric::{BiometricOracle, BiometricPrompt};
use crate::config::SPLASH_DELAY;
use crate::navigation::{Notice, Route, Transition};
use crate::session::errors::SessionError;

/// Where the app is between launch and the first real screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    Splash,
    Authenticating,
    Home,
    /// Prompt was rejected. The screen waits for the user to navigate away.
    Stopped,
}

/// Result of the biometric gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Passed, or biometrics are not set up on this device
    Proceed(Transition),
    /// The user failed the prompt
    Stopped(Notice),
    /// The oracle itself failed. Logged only; the screen keeps waiting.
    Faulted,
}

/// Drives splash → biometric gate → home
#[derive(Debug)]
pub struct SessionStateMachine {
    state: LaunchState,
    prompt: BiometricPrompt,
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new(BiometricPrompt::default())
    }
}

impl SessionStateMachine {
    pub fn new(prompt: BiometricPrompt) -> Self {
        Self {
            state: LaunchState::Splash,
            prompt,
        }
    }

    pub fn state(&self) -> LaunchState {
        self.state
    }

    /// Leave the splash screen for the biometric screen
    pub fn finish_splash(&mut self) -> Result<Transition, SessionError> {
        if self.state != LaunchState::Splash {
            return Err(SessionError::InvalidTransition(self.state));
        }
        self.state = LaunchState::Authenticating;
        tracing::debug!("Splash finished, moving to biometric gate");
        Ok(Transition::replace(Route::Biometric))
    }

    /// Hold the splash for the configured delay, then run the biometric gate
    pub async fn launch(
        &mut self,
        oracle: &dyn BiometricOracle,
    ) -> Result<GateOutcome, SessionError> {
        tokio::time::sleep(*SPLASH_DELAY).await;
        self.finish_splash()?;
        self.authenticate(oracle).await
    }

    /// Consult the oracle once. There is no retry: a rejected prompt ends in
    /// [`LaunchState::Stopped`].
    pub async fn authenticate(
        &mut self,
        oracle: &dyn BiometricOracle,
    ) -> Result<GateOutcome, SessionError> {
        if self.state != LaunchState::Authenticating {
            return Err(SessionError::InvalidTransition(self.state));
        }

        let has_hardware = match oracle.has_hardware().await {
            Ok(v) => v,
            Err(e) => {
                tracing::error!("Biometric hardware check failed: {}", e);
                return Ok(GateOutcome::Faulted);
            }
        };
        let enrolled = match oracle.is_enrolled().await {
            Ok(v) => v,
            Err(e) => {
                tracing::error!("Biometric enrollment check failed: {}", e);
                return Ok(GateOutcome::Faulted);
            }
        };

        if !has_hardware || !enrolled {
            tracing::info!(
                "Biometrics unavailable (hardware: {}, enrolled: {}), skipping gate",
                has_hardware,
                enrolled
            );
            self.state = LaunchState::Home;
            return Ok(GateOutcome::Proceed(
                Transition::replace(Route::Home)
                    .with_notice(Notice::new("Biometrics Unavailable", "Use password instead.")),
            ));
        }

        let result = match oracle.authenticate(&self.prompt).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Biometric prompt failed: {}", e);
                return Ok(GateOutcome::Faulted);
            }
        };

        if result.success {
            tracing::info!("Biometric authentication succeeded");
            self.state = LaunchState::Home;
            Ok(GateOutcome::Proceed(Transition::replace(Route::Home)))
        } else {
            tracing::info!("Biometric authentication rejected");
            self.state = LaunchState::Stopped;
            Ok(GateOutcome::Stopped(Notice::new(
                "Failed",
                "Authentication failed. Try again.",
            )))
        }
    }
}
