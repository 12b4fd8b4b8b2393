use super::data::{CAR_SUGGESTION_NAMES, CARS, CAROUSEL_VISIBLE_ITEMS, HOME_FEED};
use super::types::{CarRecord, FeedListing};

/// Read-only view over the car lists. All searches are linear scans.
#[derive(Debug, Clone, Copy)]
pub struct CarCatalog {
    cars: &'static [CarRecord],
    suggestion_names: &'static [&'static str],
    feed: &'static [FeedListing],
}

impl Default for CarCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CarCatalog {
    pub const fn builtin() -> Self {
        Self {
            cars: &CARS,
            suggestion_names: &CAR_SUGGESTION_NAMES,
            feed: &HOME_FEED,
        }
    }

    pub const fn new(
        cars: &'static [CarRecord],
        suggestion_names: &'static [&'static str],
        feed: &'static [FeedListing],
    ) -> Self {
        Self {
            cars,
            suggestion_names,
            feed,
        }
    }

    pub fn cars(&self) -> &'static [CarRecord] {
        self.cars
    }

    pub fn feed(&self) -> &'static [FeedListing] {
        self.feed
    }

    /// The listings the home carousel cycles through
    pub fn carousel_items(&self) -> &'static [FeedListing] {
        &self.feed[..CAROUSEL_VISIBLE_ITEMS.min(self.feed.len())]
    }

    /// First car whose model equals `model`, ignoring case
    pub fn find_by_model(&self, model: &str) -> Option<&'static CarRecord> {
        let wanted = model.to_lowercase();
        self.cars.iter().find(|car| car.model.to_lowercase() == wanted)
    }

    /// Cars to suggest next to `model`: everything whose model is not
    /// exactly `model`, in catalog order.
    ///
    /// The comparison is case-sensitive, so a details page opened with
    /// different casing suggests the viewed car too.
    pub fn suggestions_for(&self, model: &str) -> Vec<&'static CarRecord> {
        self.cars.iter().filter(|car| car.model != model).collect()
    }

    /// Search-box suggestions containing `query`, ignoring case.
    /// An empty query yields nothing.
    pub fn autocomplete(&self, query: &str) -> Vec<&'static str> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.suggestion_names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .copied()
            .collect()
    }
}
