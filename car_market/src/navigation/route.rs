use serde::{Deserialize, Serialize};

use super::errors::NavigationError;

const CAR_DETAILS_PREFIX: &str = "/cardetails/";

/// Every screen the application can navigate to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Splash,
    Biometric,
    Home,
    Chat,
    Settings,
    AuthOptions,
    Login,
    /// Registration, optionally remembering where the user was headed
    Register {
        redirect_to: Option<String>,
        model: Option<String>,
    },
    CarDetails {
        model: String,
    },
}

impl Route {
    /// Registration route carrying the car the user tried to open
    pub fn register_for(model: &str) -> Self {
        Route::Register {
            redirect_to: Some(Route::car_details(model).path()),
            model: Some(model.to_string()),
        }
    }

    pub fn register() -> Self {
        Route::Register {
            redirect_to: None,
            model: None,
        }
    }

    pub fn car_details(model: &str) -> Self {
        Route::CarDetails {
            model: model.to_string(),
        }
    }

    /// Route identifier, with the model percent-encoded for car details
    pub fn path(&self) -> String {
        match self {
            Route::Splash => "/".to_string(),
            Route::Biometric => "/biometric".to_string(),
            Route::Home => "/home".to_string(),
            Route::Chat => "/chat".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::AuthOptions => "/identity/options".to_string(),
            Route::Login => "/identity/login".to_string(),
            Route::Register { .. } => "/identity/register".to_string(),
            Route::CarDetails { model } => {
                format!("{CAR_DETAILS_PREFIX}{}", urlencoding::encode(model))
            }
        }
    }

    /// Parameters passed alongside the path
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Route::CarDetails { model } => vec![("model", model.clone())],
            Route::Register { redirect_to, model } => {
                let mut params = Vec::new();
                if let Some(redirect_to) = redirect_to {
                    params.push(("redirectTo", redirect_to.clone()));
                }
                if let Some(model) = model {
                    params.push(("model", model.clone()));
                }
                params
            }
            _ => Vec::new(),
        }
    }

    /// Resolve a route identifier. Parameters other than the path segment
    /// are not recovered; `/identity/register` parses to a bare registration.
    pub fn parse(path: &str) -> Result<Self, NavigationError> {
        let route = match path {
            "/" => Route::Splash,
            "/biometric" => Route::Biometric,
            "/home" => Route::Home,
            "/chat" => Route::Chat,
            "/settings" => Route::Settings,
            "/identity/options" => Route::AuthOptions,
            "/identity/login" => Route::Login,
            "/identity/register" => Route::register(),
            _ => {
                let Some(segment) = path.strip_prefix(CAR_DETAILS_PREFIX) else {
                    return Err(NavigationError::UnknownRoute(path.to_string()));
                };
                if segment.is_empty() || segment.contains('/') {
                    return Err(NavigationError::InvalidParameter(format!(
                        "model segment in {path}"
                    )));
                }
                let model = urlencoding::decode(segment)
                    .map_err(|e| NavigationError::InvalidParameter(e.to_string()))?;
                Route::CarDetails {
                    model: model.into_owned(),
                }
            }
        };
        Ok(route)
    }

    /// Screens a login or registration is needed for
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::CarDetails { .. })
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
