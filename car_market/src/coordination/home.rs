use crate::catalog::{CarCatalog, FeedListing};
use crate::navigation::{Route, Transition};
use crate::storage::SecureKeyValueStore;
use crate::userdb::ProfileStore;

use super::errors::CoordinationError;
use super::selection::handle_car_selection_core;

/// Avatar shown when the user has not uploaded one
pub const DEFAULT_PROFILE_IMAGE: &str = "default-user.png";

/// Bottom navigation bar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Chat,
    Settings,
}

impl NavTab {
    pub fn transition(self) -> Transition {
        let route = match self {
            NavTab::Home => Route::Home,
            NavTab::Chat => Route::Chat,
            NavTab::Settings => Route::Settings,
        };
        Transition::push(route)
    }
}

/// State of the home screen: search box and header avatar
#[derive(Debug, Clone)]
pub struct HomeScreen {
    catalog: CarCatalog,
    query: String,
    profile_image: Option<String>,
}

impl HomeScreen {
    pub fn new(catalog: CarCatalog) -> Self {
        Self {
            catalog,
            query: String::new(),
            profile_image: None,
        }
    }

    /// Build the screen and fetch the avatar from the store
    pub async fn load(
        store: &dyn SecureKeyValueStore,
        catalog: CarCatalog,
    ) -> Result<Self, CoordinationError> {
        let mut screen = Self::new(catalog);
        screen.profile_image = ProfileStore::profile_image(store)
            .await?
            .filter(|s| !s.is_empty());
        Ok(screen)
    }

    pub fn profile_image(&self) -> &str {
        self.profile_image
            .as_deref()
            .unwrap_or(DEFAULT_PROFILE_IMAGE)
    }

    pub fn feed(&self) -> &'static [FeedListing] {
        self.catalog.feed()
    }

    pub fn carousel_items(&self) -> &'static [FeedListing] {
        self.catalog.carousel_items()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    /// Clear the search when the screen is reopened with a reset request
    pub fn apply_reset(&mut self, reset_search: bool) {
        if reset_search {
            self.clear_search();
        }
    }

    /// Autocomplete entries for the current query
    pub fn suggestions(&self) -> Vec<&'static str> {
        self.catalog.autocomplete(&self.query)
    }

    /// Put the chosen model in the search box and route the choice
    pub async fn select(
        &mut self,
        store: &dyn SecureKeyValueStore,
        model: &str,
    ) -> Result<Transition, CoordinationError> {
        self.set_query(model);
        handle_car_selection_core(store, model).await
    }

    /// Tapping the avatar opens the login/register choice
    pub fn open_profile(&self) -> Transition {
        Transition::push(Route::AuthOptions)
    }
}
