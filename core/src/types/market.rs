//! Market route DTOs.

use serde::{Deserialize, Serialize};

/// A bazaar or item market listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketItem {
    #[serde(rename = "ID")]
    pub id: i64,
    pub cost: i64,
    pub quantity: i64,
}

/// A points market listing; `id` is the listing id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsListing {
    pub id: String,
    pub cost: i64,
    pub quantity: i64,
    pub total_cost: i64,
}
