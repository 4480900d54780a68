//! Property route DTOs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    pub owner_id: i64,
    pub property_type: i64,
    pub property: String,
    pub status: String,
    pub happy: i64,
    pub upkeep: i64,
    pub upgrades: Vec<String>,
    pub staff: Vec<String>,
    pub rented: Option<Rental>,
    pub users_living: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rental {
    pub user_id: i64,
    pub days_left: i64,
    pub total_cost: i64,
    pub cost_per_day: i64,
}
