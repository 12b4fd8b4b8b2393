use std::sync::Once;

use car_market::{InMemoryKeyValueStore, RegistrationForm, Route};

pub const TEST_EMAIL: &str = "driver@example.com";
pub const TEST_PASSWORD: &str = "vroom42";

/// Load `.env_test` (falling back to `.env`) once per test binary
pub fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });
}

pub fn new_store() -> InMemoryKeyValueStore {
    init_test_environment();
    InMemoryKeyValueStore::new()
}

pub fn registration_form() -> RegistrationForm {
    RegistrationForm {
        name: "Test Driver".to_string(),
        dob: "1985-04-23".to_string(),
        gender: "other".to_string(),
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        confirm_password: TEST_PASSWORD.to_string(),
        profile_image: Some("file:///photos/me.jpg".to_string()),
        gov_id_image: Some("file:///photos/licence.jpg".to_string()),
        redirect_to: None,
    }
}

pub fn registration_form_for(model: &str) -> RegistrationForm {
    RegistrationForm {
        redirect_to: Some(Route::car_details(model).path()),
        ..registration_form()
    }
}
