use serde::Serialize;

use crate::catalog::{CarCatalog, CarRecord};
use crate::navigation::{Route, Transition};
use crate::session::SessionContext;
use crate::storage::SecureKeyValueStore;

use super::errors::CoordinationError;

/// Route a car choice: straight to its details for an authenticated
/// session, otherwise to registration remembering the car.
pub fn select_car(ctx: &SessionContext, model: &str) -> Transition {
    if ctx.is_authenticated() {
        Transition::push(Route::car_details(model))
    } else {
        tracing::debug!("Car {} selected without a session, asking to register", model);
        Transition::push(Route::register_for(model))
    }
}

/// Load the session flags and route a car choice
pub async fn handle_car_selection_core(
    store: &dyn SecureKeyValueStore,
    model: &str,
) -> Result<Transition, CoordinationError> {
    let ctx = SessionContext::load(store).await?;
    Ok(select_car(&ctx, model))
}

/// What the details screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarDetailsView {
    /// `None` when the model is not in the catalog
    pub car: Option<&'static CarRecord>,
    pub suggestions: Vec<&'static CarRecord>,
}

/// Build the details screen for `model`. Requires an authenticated session.
pub fn car_details_core(
    ctx: &SessionContext,
    catalog: &CarCatalog,
    model: &str,
) -> Result<CarDetailsView, CoordinationError> {
    if !ctx.is_authenticated() {
        return Err(CoordinationError::Unauthorized.log());
    }

    let car = catalog.find_by_model(model);
    if car.is_none() {
        tracing::debug!("No catalog entry for {}", model);
    }

    Ok(CarDetailsView {
        car,
        suggestions: catalog.suggestions_for(model),
    })
}

/// Exact catalog lookup that treats an unknown model as an error
pub fn lookup_car_core(
    catalog: &CarCatalog,
    model: &str,
) -> Result<&'static CarRecord, CoordinationError> {
    catalog
        .find_by_model(model)
        .ok_or_else(|| CoordinationError::ResourceNotFound {
            resource_type: "Car".to_string(),
            resource_id: model.to_string(),
        })
}
