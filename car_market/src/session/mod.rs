mod errors;
mod main;
mod types;

pub use errors::SessionError;
pub use main::{GateOutcome, LaunchState, SessionStateMachine, clear_session, mark_authenticated};
pub use types::{SessionContext, SessionFlags};
