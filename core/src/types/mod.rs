//! Domain DTOs for the Torn API.
//!
//! # Design
//! One module per route. Every struct is `#[serde(default)]`: the API drops
//! fields it has no value for, and a missing field should not fail a whole
//! call. Fields whose type the API does not keep stable (a loan list that is
//! sometimes a number and sometimes a comma-joined string, report bodies that
//! vary by report type) stay `serde_json::Value`.
//!
//! Records that came out of an id-keyed collection carry the key as a string
//! `id` (or another field named by the endpoint table).

pub mod common;
pub mod company;
pub mod faction;
pub mod forum;
pub mod key;
pub mod market;
pub mod property;
pub mod racing;
pub mod torn;
pub mod user;

pub use common::{KeyValue, LastAction, News, Status};
