//! Torn (game-wide) route DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bank interest rates per investment period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bank {
    #[serde(rename = "1w")]
    pub one_week: f64,
    #[serde(rename = "2w")]
    pub two_weeks: f64,
    #[serde(rename = "1m")]
    pub one_month: f64,
    #[serde(rename = "2m")]
    pub two_months: f64,
    #[serde(rename = "3m")]
    pub three_months: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub rarity: String,
    pub class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityShop {
    pub id: String,
    pub name: String,
    pub inventory: Vec<CityShopItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityShopItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: i64,
    pub in_stock: i64,
}

/// A company type with its positions, specials and stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyType {
    pub id: String,
    pub name: String,
    pub cost: i64,
    pub default_employees: i64,
    pub positions: Vec<CompanyPosition>,
    pub specials: Vec<CompanySpecial>,
    pub stock: Vec<CompanyStock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyPosition {
    pub name: String,
    pub man_required: i64,
    pub int_required: i64,
    pub end_required: i64,
    pub man_gain: i64,
    pub int_gain: i64,
    pub end_gain: i64,
    pub special_ability: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySpecial {
    pub name: String,
    pub effect: String,
    pub cost: i64,
    pub rating_required: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyStock {
    pub name: String,
    pub cost: i64,
    pub rrp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: String,
    pub name: String,
    pub money: i64,
    pub tier: i64,
    pub duration: i64,
    pub results: Value,
    pub prerequisites: Vec<i64>,
}

/// A faction upgrade branch and the upgrades in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionTreeBranch {
    pub id: String,
    pub branch: Vec<FactionTreeUpgrade>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionTreeUpgrade {
    pub id: String,
    pub name: String,
    pub ability: String,
    pub challenge: String,
    pub base_cost: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gym {
    pub id: String,
    pub name: String,
    pub stage: i64,
    pub cost: i64,
    pub energy: i64,
    pub strength: i64,
    pub speed: i64,
    pub defense: i64,
    pub dexterity: i64,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Honor {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: i64,
    pub circulation: i64,
    pub rarity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub effect: String,
    pub requirement: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub weapon_type: Option<String>,
    pub buy_price: i64,
    pub sell_price: i64,
    pub market_value: i64,
    pub circulation: i64,
    pub image: String,
}

/// Details of one unique item instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDetails {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "UID")]
    pub uid: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rarity: String,
    pub damage: f64,
    pub accuracy: f64,
    pub armor: f64,
    pub quality: f64,
    pub bonuses: Vec<ItemBonus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemBonus {
    pub id: String,
    pub bonus: String,
    pub description: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Medal {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub circulation: i64,
    pub rarity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganisedCrime {
    pub id: String,
    pub name: String,
    pub members: i64,
    pub time: i64,
    pub min_cash: i64,
    pub max_cash: i64,
    pub min_respect: i64,
    pub max_respect: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pawnshop {
    pub points_value: i64,
    pub donatorpack_value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokerTable {
    pub id: String,
    pub name: String,
    pub big_blind: i64,
    pub small_blind: i64,
    pub speed: i64,
    pub current_players: i64,
    pub maximum_players: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyType {
    pub id: String,
    pub name: String,
    pub cost: i64,
    pub happy: i64,
    pub upkeep: i64,
    pub upgrades_available: Vec<String>,
    pub staff_available: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Racket {
    pub id: String,
    pub name: String,
    pub level: i64,
    pub description: String,
    pub reward: String,
    pub created: i64,
    pub changed: i64,
    pub faction: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Raid {
    pub id: String,
    pub assaulting_faction: i64,
    pub defending_faction: i64,
    pub assaulting_score: f64,
    pub defending_score: f64,
    pub started: i64,
}

/// The outcome of a finished ranked war.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedWarReport {
    pub war: Value,
    pub factions: Vec<RankedWarReportFaction>,
    pub members: Vec<RankedWarReportMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedWarReportFaction {
    pub id: String,
    pub name: String,
    pub score: i64,
    pub attacks: i64,
    pub rank_before: String,
    pub rank_after: String,
    pub rewards: RankedWarRewards,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedWarRewards {
    pub respect: i64,
    pub points: i64,
    pub items: Vec<RewardItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardItem {
    pub id: String,
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedWarReportMember {
    pub id: String,
    pub name: String,
    pub faction_id: i64,
    pub level: i64,
    pub attacks: i64,
    pub score: f64,
}

/// Game-wide population statistics. Only the headline counters are typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TornStats {
    pub timestamp: i64,
    pub users_total: i64,
    pub users_male: i64,
    pub users_female: i64,
    pub users_enby: i64,
    pub users_marriedcouples: i64,
    pub users_daily: i64,
    pub total_users_racingskill: i64,
    pub factions: i64,
    pub companies: i64,
    pub crimes: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stock {
    pub stock_id: i64,
    pub name: String,
    pub acronym: String,
    pub current_price: f64,
    pub market_cap: i64,
    pub total_shares: i64,
    pub investors: i64,
    pub benefit: Value,
}

/// One stock looked up by id, with its history windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockDetail {
    pub id: String,
    pub stock_id: i64,
    pub name: String,
    pub acronym: String,
    pub current_price: f64,
    pub market_cap: i64,
    pub total_shares: i64,
    pub investors: i64,
    pub benefit: Value,
    pub last_hour: Value,
    pub last_day: Value,
    pub last_week: Value,
    pub last_month: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerritoryWar {
    pub id: String,
    pub assaulting_faction: i64,
    pub defending_faction: i64,
    pub score: i64,
    pub required_score: i64,
    pub started: i64,
    pub ends: i64,
}
