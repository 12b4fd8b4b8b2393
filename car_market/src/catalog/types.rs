use serde::Serialize;

/// A sellable car, compiled into the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarRecord {
    pub id: u32,
    pub model: &'static str,
    /// Display string, never parsed
    pub price: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// A card on the home feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedListing {
    pub id: u32,
    pub model: &'static str,
    pub price: &'static str,
    pub image: &'static str,
}
