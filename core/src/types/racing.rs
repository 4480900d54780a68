//! Racing route DTOs (v2 scheme).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceCar {
    pub car_item_id: i64,
    pub car_item_name: String,
    pub top_speed: i64,
    pub acceleration: i64,
    pub braking: i64,
    pub dirt: i64,
    pub handling: i64,
    pub safety: i64,
    pub tarmac: i64,
    pub class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceCarUpgrade {
    pub id: i64,
    pub class_required: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub subcategory: String,
    pub effects: Value,
    pub cost: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Race {
    pub id: i64,
    pub track_id: i64,
    pub creator_id: i64,
    pub title: String,
    pub status: String,
    pub laps: i64,
    pub participants: Value,
    pub schedule: Option<RaceSchedule>,
    pub requirements: Value,
    pub results: Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceSchedule {
    pub join_from: i64,
    pub join_until: i64,
    pub start: i64,
    pub end: Option<i64>,
}

/// A best-lap record for a track and car class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceRecord {
    pub driver_id: i64,
    pub driver_name: String,
    pub car_item_id: i64,
    pub car_item_name: String,
    pub lap_time: f64,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceTrack {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Which races to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceCategory {
    Official,
    Custom,
}

impl fmt::Display for RaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaceCategory::Official => write!(f, "official"),
            RaceCategory::Custom => write!(f, "custom"),
        }
    }
}

/// Car class, A being the fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceClass {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for RaceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match self {
            RaceClass::A => "A",
            RaceClass::B => "B",
            RaceClass::C => "C",
            RaceClass::D => "D",
            RaceClass::E => "E",
        };
        f.write_str(class)
    }
}
