mod data;
mod search;
mod types;

pub use data::{CAR_SUGGESTION_NAMES, CARS, CAROUSEL_VISIBLE_ITEMS, HOME_FEED};
pub use search::CarCatalog;
pub use types::{CarRecord, FeedListing};
