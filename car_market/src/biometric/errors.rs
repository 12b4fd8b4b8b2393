use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum BiometricError {
    #[error("Biometric sensor error: {0}")]
    Sensor(String),

    #[error("Biometric prompt error: {0}")]
    Prompt(String),
}
