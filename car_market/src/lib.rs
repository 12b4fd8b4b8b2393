//! car_market - Session, identity and catalog core for a car marketplace app
//!
//! This crate holds the screen logic of the marketplace: the launch and
//! biometric gate, login and registration against the platform secure
//! store, the car catalog with its search box, and the gated details
//! screen. The secure store and the biometric sensor are supplied by the
//! host through the [`SecureKeyValueStore`] and [`BiometricOracle`] traits.

mod biometric;
mod carousel;
mod catalog;
mod config;
mod coordination;
mod navigation;
mod session;
mod storage;
mod task;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    AuthOption, CarDetailsView, CoordinationError, DEFAULT_PROFILE_IMAGE, HomeScreen,
    LoginRequest, NavTab, RegistrationForm, ValidationError, back_to_options, car_details_core,
    choose_auth_option, handle_car_selection_core, handle_login_core, handle_logout_core,
    handle_register_core, handle_swipe_release, load_profile_summary_core, lookup_car_core,
    select_car, switch_to_login, switch_to_register, update_profile,
};

pub use biometric::{AuthenticationResult, BiometricError, BiometricOracle, BiometricPrompt};

pub use carousel::{Carousel, CarouselScroller, ScrollError, run_carousel, spawn_carousel};

pub use catalog::{
    CAR_SUGGESTION_NAMES, CARS, CAROUSEL_VISIBLE_ITEMS, CarCatalog, CarRecord, FeedListing,
    HOME_FEED,
};

pub use config::{
    BIOMETRIC_FALLBACK_LABEL, BIOMETRIC_PROMPT_MESSAGE, CAROUSEL_INTERVAL,
    PASSWORD_HASH_ITERATIONS, SPLASH_DELAY,
};

pub use navigation::{NavigationError, NavigationMode, Notice, Route, SwipeGesture, Transition};

pub use session::{
    GateOutcome, LaunchState, SessionContext, SessionError, SessionFlags, SessionStateMachine,
    clear_session, mark_authenticated,
};

pub use storage::{InMemoryKeyValueStore, SecureKeyValueStore, StorageError, StoreKey};

pub use task::{ScreenTasks, TaskHandle};

pub use userdb::{NewProfile, ProfileStore, ProfileSummary, UserError, UserProfile};

pub use utils::UtilError;

/// Resolve the configuration up front so misconfiguration shows in the
/// logs at startup rather than on first use
pub fn init() {
    tracing::info!(
        "car_market configured: splash {:?}, carousel {:?}, hash iterations {}",
        *SPLASH_DELAY,
        *CAROUSEL_INTERVAL,
        *PASSWORD_HASH_ITERATIONS
    );
    tracing::debug!(
        "Biometric prompt: {:?} / {:?}",
        *BIOMETRIC_PROMPT_MESSAGE,
        *BIOMETRIC_FALLBACK_LABEL
    );
}
