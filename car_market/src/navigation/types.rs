use serde::{Deserialize, Serialize};

use super::route::Route;

/// A modal alert shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: Option<String>,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: Some(message.into()),
        }
    }

    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.title, message),
            None => f.write_str(&self.title),
        }
    }
}

/// Whether the destination is pushed on top of the history or replaces
/// the current entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    Push,
    Replace,
}

/// Result of a flow: where to go next and what to tell the user first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub route: Route,
    pub mode: NavigationMode,
    pub notice: Option<Notice>,
}

impl Transition {
    pub fn push(route: Route) -> Self {
        Self {
            route,
            mode: NavigationMode::Push,
            notice: None,
        }
    }

    pub fn replace(route: Route) -> Self {
        Self {
            route,
            mode: NavigationMode::Replace,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}
