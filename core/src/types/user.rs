//! User route DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{LastAction, Status};

/// `user/?selections=` (basic/profile).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub player_id: i64,
    pub name: String,
    pub level: i64,
    pub gender: String,
    pub rank: String,
    pub property: String,
    pub property_id: i64,
    pub signup: String,
    pub awards: i64,
    pub friends: i64,
    pub enemies: i64,
    pub forum_posts: i64,
    pub karma: i64,
    pub age: i64,
    pub role: String,
    pub donator: i64,
    pub competition: Value,
    pub life: Bar,
    pub status: Status,
    pub job: Job,
    pub faction: UserFaction,
    pub married: Married,
    pub basicicons: Map<String, Value>,
    pub states: States,
    pub last_action: LastAction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub position: String,
    pub company_id: i64,
    pub company_name: String,
    pub company_type: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFaction {
    pub position: String,
    pub faction_id: i64,
    pub days_in_faction: i64,
    pub faction_name: String,
    pub faction_tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Married {
    pub spouse_id: i64,
    pub spouse_name: String,
    pub duration: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct States {
    pub hospital_timestamp: i64,
    pub jail_timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ammo {
    #[serde(rename = "ammoID")]
    pub ammo_id: i64,
    #[serde(rename = "typeID")]
    pub type_id: i64,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: i64,
    pub equipped: i64,
}

/// A regenerating bar (life, energy, nerve, happy).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bar {
    pub current: i64,
    pub maximum: i64,
    pub increment: i64,
    pub interval: i64,
    pub ticktime: i64,
    pub fulltime: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bars {
    pub server_time: i64,
    pub happy: Bar,
    pub life: Bar,
    pub energy: Bar,
    pub nerve: Bar,
    pub chain: ChainBar,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainBar {
    pub current: i64,
    pub maximum: i64,
    pub timeout: i64,
    pub modifier: f64,
    pub cooldown: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleStats {
    pub strength: i64,
    pub speed: i64,
    pub dexterity: i64,
    pub defense: i64,
    pub total: i64,
    pub strength_modifier: i64,
    pub defense_modifier: i64,
    pub speed_modifier: i64,
    pub dexterity_modifier: i64,
    pub strength_info: Vec<String>,
    pub defense_info: Vec<String>,
    pub speed_info: Vec<String>,
    pub dexterity_info: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cooldowns {
    pub drug: i64,
    pub medical: i64,
    pub booster: i64,
}

/// Served by the `crimes` selection under the `criminalrecord` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriminalRecord {
    pub selling_illegal_products: i64,
    pub theft: i64,
    pub auto_theft: i64,
    pub drug_deals: i64,
    pub computer_crimes: i64,
    pub murder: i64,
    pub fraud_crimes: i64,
    pub other: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discord {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "discordID")]
    pub discord_id: String,
}

/// Personal statistics. The API has several hundred counters; the common
/// ones are typed and the rest are kept in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalStats {
    pub networth: i64,
    pub attackswon: i64,
    pub attackslost: i64,
    pub attacksdraw: i64,
    pub defendswon: i64,
    pub defendslost: i64,
    pub bestkillstreak: i64,
    pub killstreak: i64,
    pub bestdamage: i64,
    pub xantaken: i64,
    pub refills: i64,
    pub traveltimes: i64,
    pub revives: i64,
    pub statenhancersused: i64,
    pub bountiesplaced: i64,
    pub bountiesreceived: i64,
    pub bountiescollected: i64,
    pub totalbountyreward: i64,
    pub totalbountyspent: i64,
    pub useractivity: i64,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
