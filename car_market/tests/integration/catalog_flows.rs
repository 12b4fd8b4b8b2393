use car_market::{
    CarCatalog, CoordinationError, HomeScreen, Route, SessionContext, car_details_core,
    handle_logout_core, handle_register_core, select_car,
};

use crate::common::{new_store, registration_form, registration_form_for};

#[tokio::test]
async fn test_anonymous_selection_registers_then_resumes() {
    // Given an anonymous user searching on the home screen
    let store = new_store();
    let mut home = HomeScreen::load(&store, CarCatalog::builtin()).await.unwrap();
    home.set_query("mazda");
    assert_eq!(home.suggestions(), vec!["Mazda 6"]);

    // When picking a suggestion
    let transition = home.select(&store, "Mazda 6").await.unwrap();

    // Then registration is asked for, remembering the car
    let Route::Register { redirect_to, model } = &transition.route else {
        panic!("expected registration, got {}", transition.route);
    };
    assert_eq!(model.as_deref(), Some("Mazda 6"));
    assert_eq!(redirect_to.as_deref(), Some("/cardetails/Mazda%206"));

    // And registering with that intent lands on the car
    let form = car_market::RegistrationForm {
        redirect_to: redirect_to.clone(),
        ..registration_form()
    };
    let transition = handle_register_core(&store, &form).await.unwrap();
    assert_eq!(transition.route, Route::car_details("Mazda 6"));

    // Where the details are now visible
    let ctx = SessionContext::load(&store).await.unwrap();
    let view = car_details_core(&ctx, &CarCatalog::builtin(), "Mazda 6").unwrap();
    assert_eq!(view.car.map(|c| c.price), Some("$16,000"));
    assert!(view.suggestions.iter().all(|c| c.model != "Mazda 6"));
}

#[tokio::test]
async fn test_details_locked_after_logout() {
    let store = new_store();
    handle_register_core(&store, &registration_form_for("Audi A4"))
        .await
        .unwrap();
    let ctx = SessionContext::load(&store).await.unwrap();
    assert!(car_details_core(&ctx, &CarCatalog::builtin(), "Audi A4").is_ok());

    handle_logout_core(&store).await.unwrap();

    let ctx = SessionContext::load(&store).await.unwrap();
    assert!(matches!(
        car_details_core(&ctx, &CarCatalog::builtin(), "Audi A4"),
        Err(CoordinationError::Unauthorized)
    ));
    assert_eq!(
        select_car(&ctx, "Audi A4").route,
        Route::register_for("Audi A4")
    );
}

#[tokio::test]
async fn test_feed_model_missing_from_catalog() {
    // The feed advertises cars the catalog does not describe
    let store = new_store();
    handle_register_core(&store, &registration_form())
        .await
        .unwrap();
    let home = HomeScreen::load(&store, CarCatalog::builtin()).await.unwrap();
    let listing = home
        .feed()
        .iter()
        .find(|l| l.model == "CyberTruck Tesla")
        .unwrap();

    let ctx = SessionContext::load(&store).await.unwrap();
    let view = car_details_core(&ctx, &CarCatalog::builtin(), listing.model).unwrap();

    assert!(view.car.is_none());
    assert_eq!(home.profile_image(), "file:///photos/me.jpg");
}

#[test]
fn test_search_examples() {
    let catalog = CarCatalog::builtin();
    assert_eq!(catalog.autocomplete("honda"), vec!["Honda Accord"]);
    assert!(catalog.autocomplete("").is_empty());
    assert_eq!(catalog.find_by_model("toyota camry").map(|c| c.id), Some(1));
    assert_eq!(catalog.find_by_model("Toyota Camry").map(|c| c.id), Some(1));
    assert!(catalog.find_by_model("Tesla Model X").is_none());
}
