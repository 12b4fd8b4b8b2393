mod errors;
mod home;
mod login;
mod options;
mod register;
mod selection;
mod settings;
mod validation;

pub use errors::CoordinationError;
pub use home::{DEFAULT_PROFILE_IMAGE, HomeScreen, NavTab};
pub use login::{LoginRequest, handle_login_core};
pub use options::{
    AuthOption, back_to_options, choose_auth_option, handle_swipe_release, switch_to_login,
    switch_to_register,
};
pub use register::{RegistrationForm, handle_register_core};
pub use selection::{
    CarDetailsView, car_details_core, handle_car_selection_core, lookup_car_core, select_car,
};
pub use settings::{handle_logout_core, load_profile_summary_core, update_profile};
pub use validation::ValidationError;
