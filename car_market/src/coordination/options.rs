use crate::navigation::{Route, SwipeGesture, Transition};

/// The two buttons on the auth options screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOption {
    Login,
    Register,
}

pub fn choose_auth_option(option: AuthOption) -> Transition {
    match option {
        AuthOption::Login => Transition::push(Route::Login),
        AuthOption::Register => Transition::push(Route::register()),
    }
}

/// "Don't have an account? Register" link on the login screen
pub fn switch_to_register() -> Transition {
    Transition::push(Route::register())
}

/// "Already have an account? Login" link on the registration screen
pub fn switch_to_login() -> Transition {
    Transition::push(Route::Login)
}

/// Back button on the login and registration screens
pub fn back_to_options() -> Transition {
    Transition::replace(Route::AuthOptions)
}

/// Resolve a released swipe on one of the identity screens
pub fn handle_swipe_release(
    from: &Route,
    gesture: SwipeGesture,
    screen_height: f32,
) -> Option<Transition> {
    gesture
        .back_destination(from, screen_height)
        .map(Transition::replace)
}
