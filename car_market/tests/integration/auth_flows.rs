use car_market::{
    AuthOption, CoordinationError, LoginRequest, Notice, ProfileStore, Route, SecureKeyValueStore,
    SessionContext, StoreKey, SwipeGesture, ValidationError, choose_auth_option,
    handle_login_core, handle_logout_core, handle_register_core, handle_swipe_release,
    load_profile_summary_core, switch_to_login, switch_to_register, update_profile,
};

use crate::common::{TEST_EMAIL, TEST_PASSWORD, new_store, registration_form};

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_logout_login_cycle() {
    let store = new_store();

    // Register from the auth options screen
    let to_register = choose_auth_option(AuthOption::Register);
    assert_eq!(to_register.route.path(), "/identity/register");
    let transition = handle_register_core(&store, &registration_form())
        .await
        .unwrap();
    assert_eq!(transition.route, Route::Home);
    assert!(SessionContext::load(&store).await.unwrap().is_authenticated());

    // Settings shows the profile
    let summary = load_profile_summary_core(&store).await.unwrap();
    assert_eq!(summary.name, "Test Driver");
    assert_eq!(summary.email, TEST_EMAIL);
    assert_eq!(summary.profile_image.as_deref(), Some("file:///photos/me.jpg"));
    assert_eq!(update_profile().route, to_register.route);

    // Logout wipes every key
    let transition = handle_logout_core(&store).await.unwrap();
    assert_eq!(transition.route, Route::AuthOptions);
    for key in StoreKey::ALL {
        assert!(store.get(key).await.unwrap().is_none(), "{key} survived logout");
    }

    // With the account gone, the old credentials no longer work
    let err = handle_login_core(&store, &login(TEST_EMAIL, TEST_PASSWORD))
        .await
        .unwrap_err();
    assert!(matches!(err, CoordinationError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_after_flags_dropped() {
    // Given a registered account whose session flags were cleared
    let store = new_store();
    handle_register_core(&store, &registration_form())
        .await
        .unwrap();
    store.delete(StoreKey::IsLoggedIn).await.unwrap();
    store.delete(StoreKey::IsVerified).await.unwrap();
    assert!(!SessionContext::load(&store).await.unwrap().is_authenticated());

    // When logging in with the registered credentials
    let transition = handle_login_core(&store, &login(TEST_EMAIL, TEST_PASSWORD))
        .await
        .unwrap();

    // Then both flags are back
    assert_eq!(transition.route, Route::Home);
    assert_eq!(transition.notice, Some(Notice::title_only("Login Successful")));
    assert!(SessionContext::load(&store).await.unwrap().is_authenticated());
}

#[tokio::test]
async fn test_failed_login_leaves_flags_untouched() {
    let store = new_store();
    handle_register_core(&store, &registration_form())
        .await
        .unwrap();
    store.set(StoreKey::IsVerified, "false").await.unwrap();

    let err = handle_login_core(&store, &login(TEST_EMAIL, "wrong-password"))
        .await
        .unwrap_err();

    assert_eq!(
        err.notice(),
        Some(Notice::new("Invalid Credentials", "Email or password is incorrect."))
    );
    assert_eq!(
        store.get(StoreKey::IsVerified).await.unwrap().as_deref(),
        Some("false")
    );
}

#[tokio::test]
async fn test_password_is_not_stored_in_plain_text() {
    let store = new_store();
    handle_register_core(&store, &registration_form())
        .await
        .unwrap();

    let profile = ProfileStore::load(&store).await.unwrap();
    let record = profile.password_record.unwrap();

    assert!(!record.contains(TEST_PASSWORD));
    assert!(record.starts_with("pbkdf2-sha256$"));
}

#[tokio::test]
async fn test_invalid_registration_reports_first_problem() {
    let store = new_store();
    let form = car_market::RegistrationForm {
        email: "not-an-email".to_string(),
        dob: "23/04/1985".to_string(),
        ..registration_form()
    };

    let err = handle_register_core(&store, &form).await.unwrap_err();

    assert!(matches!(
        err,
        CoordinationError::Validation(ValidationError::InvalidEmail)
    ));
    assert!(store.is_empty().await);
}

#[test]
fn test_swipe_back_through_identity_screens() {
    let swipe = SwipeGesture::new(-75.0, 700.0);

    let from_login = handle_swipe_release(&Route::Login, swipe, 800.0).unwrap();
    assert_eq!(from_login.route, Route::AuthOptions);

    let from_options = handle_swipe_release(&from_login.route, swipe, 800.0).unwrap();
    assert_eq!(from_options.route, Route::Home);

    assert!(handle_swipe_release(&from_options.route, swipe, 800.0).is_none());
}

#[test]
fn test_links_between_identity_screens() {
    assert_eq!(switch_to_register().route, Route::register());
    assert_eq!(switch_to_login().route, Route::Login);
}
