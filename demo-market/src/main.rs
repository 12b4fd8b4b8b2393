use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use car_market::{
    CarCatalog, Carousel, GateOutcome, HomeScreen, InMemoryKeyValueStore, RegistrationForm, Route,
    ScreenTasks, SessionContext, SessionStateMachine, Transition, car_details_core,
    handle_logout_core, handle_register_core, load_profile_summary_core, spawn_carousel,
};

mod devices;

use devices::{EnvBiometricOracle, LogScroller};

fn show(transition: &Transition) {
    tracing::info!("Navigate ({:?}) to {}", transition.mode, transition.route);
    if let Some(notice) = &transition.notice {
        tracing::info!("Alert: {}", notice);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,car_market=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    car_market::init();

    let store = InMemoryKeyValueStore::new();
    let oracle = EnvBiometricOracle::from_env();

    // Splash and biometric gate
    let mut machine = SessionStateMachine::default();
    match machine.launch(&oracle).await? {
        GateOutcome::Proceed(transition) => show(&transition),
        GateOutcome::Stopped(notice) => {
            tracing::warn!("Alert: {}", notice);
            return Ok(());
        }
        GateOutcome::Faulted => {
            tracing::warn!("Biometric gate faulted, staying on {}", Route::Biometric);
            return Ok(());
        }
    }

    // Home screen with a running carousel
    let home_tasks = ScreenTasks::new("home");
    let mut home = HomeScreen::load(&store, CarCatalog::builtin()).await?;
    let items = home.carousel_items();
    let carousel = Arc::new(Mutex::new(Carousel::new(items.len())));
    let carousel_task = spawn_carousel(
        &home_tasks,
        carousel,
        Arc::new(LogScroller { items }),
    );

    home.set_query("series");
    tracing::info!("Suggestions for {:?}: {:?}", home.query(), home.suggestions());

    // An anonymous selection goes through registration
    let transition = home.select(&store, "BMW 3 Series").await?;
    show(&transition);

    let redirect_to = match &transition.route {
        Route::Register { redirect_to, .. } => redirect_to.clone(),
        _ => None,
    };
    let form = RegistrationForm {
        name: "Demo Driver".to_string(),
        dob: "1990-01-31".to_string(),
        gender: "female".to_string(),
        email: "demo@example.com".to_string(),
        password: "demo-password".to_string(),
        confirm_password: "demo-password".to_string(),
        profile_image: Some("file:///demo/avatar.jpg".to_string()),
        gov_id_image: Some("file:///demo/licence.jpg".to_string()),
        redirect_to,
    };
    let transition = handle_register_core(&store, &form).await?;
    show(&transition);

    if let Route::CarDetails { model } = &transition.route {
        let ctx = SessionContext::load(&store).await?;
        let view = car_details_core(&ctx, &CarCatalog::builtin(), model)?;
        match view.car {
            Some(car) => tracing::info!("{}: {} - {}", car.model, car.price, car.description),
            None => tracing::info!("No details for {}", model),
        }
        for car in view.suggestions.iter().take(3) {
            tracing::info!("Also consider {} at {}", car.model, car.price);
        }
    }

    // Let the carousel turn a few times before leaving home
    tokio::time::sleep(Duration::from_secs(7)).await;
    home_tasks.teardown();
    carousel_task.join().await;

    let summary = load_profile_summary_core(&store).await?;
    tracing::info!("Signed in as {} <{}>", summary.name, summary.email);

    let transition = handle_logout_core(&store).await?;
    show(&transition);
    tracing::info!("Keys left in store: {}", store.len().await);

    Ok(())
}
