mod errors;
mod gesture;
mod route;
mod types;

pub use errors::NavigationError;
pub use gesture::SwipeGesture;
pub use route::Route;
pub use types::{NavigationMode, Notice, Transition};
