//! Key route DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What the current key may access: its level and the selections it can
/// request on each route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyInfo {
    pub access_level: i64,
    pub access_type: String,
    pub selections: BTreeMap<String, Vec<String>>,
}
