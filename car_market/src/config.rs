//! Central configuration for the car_market crate
//!
//! Values are read from the environment once, on first use. Missing or
//! unparsable values fall back to the defaults below.

use std::sync::LazyLock;
use std::time::Duration;

const DEFAULT_SPLASH_DELAY_MS: u64 = 2000;
const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 3000;
const DEFAULT_PASSWORD_HASH_ITERATIONS: u32 = 100_000;

/// How long the splash screen is held before moving on to `/biometric`.
/// Default: 2000 ms
pub static SPLASH_DELAY: LazyLock<Duration> = LazyLock::new(|| {
    Duration::from_millis(parse_env_or("SPLASH_DELAY_MS", DEFAULT_SPLASH_DELAY_MS))
});

/// Period of the home screen carousel auto-advance.
/// Default: 3000 ms
pub static CAROUSEL_INTERVAL: LazyLock<Duration> = LazyLock::new(|| {
    Duration::from_millis(parse_env_or(
        "CAROUSEL_INTERVAL_MS",
        DEFAULT_CAROUSEL_INTERVAL_MS,
    ))
});

pub static BIOMETRIC_PROMPT_MESSAGE: LazyLock<String> = LazyLock::new(|| {
    std::env::var("BIOMETRIC_PROMPT_MESSAGE")
        .unwrap_or_else(|_| "Authenticate to continue".to_string())
});

pub static BIOMETRIC_FALLBACK_LABEL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("BIOMETRIC_FALLBACK_LABEL").unwrap_or_else(|_| "Use passcode".to_string())
});

/// PBKDF2 iteration count applied to newly registered passwords.
/// Existing records keep the count they were created with.
pub static PASSWORD_HASH_ITERATIONS: LazyLock<u32> = LazyLock::new(|| {
    let iterations = parse_env_or("PASSWORD_HASH_ITERATIONS", DEFAULT_PASSWORD_HASH_ITERATIONS);
    if iterations == 0 {
        tracing::warn!("PASSWORD_HASH_ITERATIONS must be positive, using default");
        DEFAULT_PASSWORD_HASH_ITERATIONS
    } else {
        iterations
    }
});

fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
