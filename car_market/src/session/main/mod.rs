mod flags;
mod launch;

pub use flags::{clear_session, mark_authenticated};
pub use launch::{GateOutcome, LaunchState, SessionStateMachine};
