//! Shapes shared across routes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One entry of a scalar-valued id-keyed collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: Value,
}

impl From<KeyValue> for Value {
    fn from(pair: KeyValue) -> Self {
        json!({ "key": pair.key, "value": pair.value })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub description: String,
    pub details: String,
    pub state: String,
    pub color: String,
    pub until: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastAction {
    pub status: String,
    pub timestamp: i64,
    pub relative: String,
}

/// A faction news entry (armory, attack, crime, funds, main, membership,
/// territory). `id` is the key it was listed under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct News {
    pub id: String,
    pub news: String,
    pub timestamp: i64,
}
