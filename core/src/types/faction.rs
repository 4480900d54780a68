//! Faction route DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{LastAction, Status};

/// `faction/?selections=` (basic): the faction profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faction {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub tag: String,
    pub tag_image: String,
    pub leader: i64,
    #[serde(rename = "co-leader")]
    pub co_leader: i64,
    pub respect: i64,
    pub age: i64,
    pub capacity: i64,
    pub best_chain: i64,
    pub territory_wars: Value,
    pub raid_wars: Value,
    pub peace: Vec<Peace>,
    pub ranked_wars: Option<RankedWar>,
    pub members: Vec<Member>,
}

/// A peace treaty: the other faction and when the treaty ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peace {
    pub faction_id: i64,
    pub until: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub level: i64,
    pub days_in_faction: i64,
    pub position: String,
    pub last_action: LastAction,
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedWar {
    pub id: String,
    pub factions: Vec<RankedWarFaction>,
    pub war: RankedWarInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedWarFaction {
    pub id: String,
    pub name: String,
    pub score: i64,
    pub chain: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedWarInfo {
    pub start: i64,
    pub end: i64,
    pub target: i64,
    pub winner: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub name: String,
    pub level: i64,
    pub stats: ApplicantStats,
    pub message: String,
    pub expires: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantStats {
    pub strength: i64,
    pub speed: i64,
    pub dexterity: i64,
    pub defence: i64,
}

/// An armory item. Armor, weapons, drugs, medical items, boosters and
/// temporary items all share this shape; the loan fields are only present
/// for loanable items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmoryItem {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: i64,
    pub available: Option<i64>,
    pub loaned: Option<i64>,
    /// A user id, a comma-joined list of user ids, or null.
    pub loaned_to: Value,
}

/// An attack log entry. The `*full` selections omit names and modifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attack {
    pub code: String,
    pub timestamp_started: i64,
    pub timestamp_ended: i64,
    /// Empty string for stealthed attackers.
    pub attacker_id: Value,
    pub attacker_name: Option<String>,
    pub attacker_faction: Value,
    pub attacker_factionname: Option<String>,
    pub defender_id: i64,
    pub defender_name: Option<String>,
    pub defender_faction: Value,
    pub defender_factionname: Option<String>,
    pub result: String,
    pub stealthed: i64,
    pub respect: Option<f64>,
    pub respect_gain: f64,
    pub chain: Option<i64>,
    pub modifiers: Option<AttackModifiers>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackModifiers {
    pub fair_fight: f64,
    pub war: f64,
    pub retaliation: f64,
    pub group_attack: f64,
    pub overseas: f64,
    pub chain_bonus: f64,
}

/// The faction's current chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chain {
    pub current: i64,
    pub max: i64,
    pub timeout: i64,
    pub modifier: f64,
    pub cooldown: i64,
    pub start: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainReport {
    #[serde(rename = "factionID")]
    pub faction_id: i64,
    pub chain: i64,
    pub start: i64,
    pub end: i64,
    pub leave: i64,
    pub mug: i64,
    pub hospitalize: i64,
    pub assists: i64,
    pub retaliations: i64,
    pub overseas: i64,
    pub draws: i64,
    pub escapes: i64,
    pub losses: i64,
    pub respect: f64,
    pub targets: i64,
    pub war: i64,
    pub besthit: f64,
    pub members: Vec<ChainReportMember>,
    pub bonuses: Vec<ChainBonus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainReportMember {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "factionID")]
    pub faction_id: i64,
    pub level: i64,
    pub respect: f64,
    pub best: f64,
    pub avg: f64,
    pub attacks: i64,
    pub leave: i64,
    pub mug: i64,
    pub hosp: i64,
    pub war: i64,
    pub bonus: i64,
    pub assist: i64,
    pub retaliation: i64,
    pub overseas: i64,
    pub draw: i64,
    pub escape: i64,
    pub loss: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainBonus {
    pub attacker: i64,
    pub defender: i64,
    pub chain: i64,
    pub respect: f64,
}

/// A finished chain from the `chains` selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletedChain {
    pub id: String,
    pub chain: i64,
    /// Reported as a decimal string.
    pub respect: Value,
    pub start: i64,
    pub end: i64,
}

/// An organised crime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crime {
    pub id: String,
    pub crime_id: i64,
    pub crime_name: String,
    pub participants: Vec<CrimeParticipant>,
    pub time_started: i64,
    pub time_ready: i64,
    pub time_left: i64,
    pub time_completed: i64,
    pub initiated: i64,
    pub initiated_by: i64,
    pub planned_by: i64,
    pub success: i64,
    pub money_gain: i64,
    pub respect_gain: i64,
}

/// A crime participant. Status fields are absent once the crime is done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrimeParticipant {
    pub id: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub state: Option<String>,
    pub color: Option<String>,
    pub until: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub faction_id: i64,
    pub points: i64,
    pub money: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Donation {
    pub id: String,
    pub name: String,
    pub money_balance: i64,
    pub points_balance: i64,
}

/// A faction position and its permissions (0 or 1 each).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Position {
    pub title: String,
    pub default: i64,
    pub can_use_medical_item: i64,
    pub can_use_booster_item: i64,
    pub can_use_drug_item: i64,
    pub can_use_energy_refill: i64,
    pub can_use_nerve_refill: i64,
    pub can_loan_temporary_item: i64,
    pub can_loan_weapon_and_armory: i64,
    pub can_adjust_member_balance: i64,
    pub can_manage_wars: i64,
    pub can_manage_applications: i64,
    pub can_kick_members: i64,
    pub can_access_faction_api: i64,
    pub can_give_item: i64,
    pub can_give_money: i64,
    pub can_give_points: i64,
    pub can_manage_forum: i64,
    #[serde(rename = "canManageOC")]
    pub can_manage_oc: i64,
    pub can_manage_upgrades: i64,
}

/// A spy, friend-or-foe or bounty report. `report` is an object of stats for
/// stat reports and a list of strings for bounty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionReport {
    pub id: String,
    pub user_id: i64,
    pub target: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub report: Value,
    pub timestamp: i64,
}

/// A revive. The `revivesfull` selection omits names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Revive {
    pub id: String,
    pub timestamp: i64,
    pub result: String,
    pub chance: f64,
    pub reviver_id: i64,
    pub reviver_name: Option<String>,
    pub reviver_faction: i64,
    pub reviver_factionname: Option<String>,
    pub target_id: i64,
    pub target_name: Option<String>,
    pub target_faction: i64,
    pub target_factionname: Option<String>,
    pub target_hospital_reason: String,
    pub target_early_discharge: i64,
    pub target_last_action: LastAction,
}

/// Lifetime faction statistics. The API leaves out counters that are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionStats {
    pub drugsused: i64,
    pub gymtrains: i64,
    pub gymstrength: i64,
    pub gymdefense: i64,
    pub gymspeed: i64,
    pub gymdexterity: i64,
    pub criminaloffences: i64,
    pub jails: i64,
    pub hosps: i64,
    pub medicalitemsused: i64,
    pub medicalcooldownused: i64,
    pub medicalitemrecovery: i64,
    pub attacksdamagehits: i64,
    pub attacksdamage: i64,
    pub hosptimegiven: i64,
    pub hosptimereceived: i64,
    pub attacksleave: i64,
    pub attackswon: i64,
    pub attackslost: i64,
    pub attacksmug: i64,
    pub attackshosp: i64,
    pub attacksdamaging: i64,
    pub attacksrunaway: i64,
    pub candyused: i64,
    pub energydrinkused: i64,
    pub alcoholused: i64,
    pub organisedcrimefail: i64,
    pub organisedcrimesuccess: i64,
    pub organisedcrimerespect: i64,
    pub organisedcrimemoney: i64,
    pub busts: i64,
    pub drugoverdoses: i64,
    pub bestchain: i64,
    pub traveltimes: i64,
    pub traveltime: i64,
    pub rehabs: i64,
    pub hunting: i64,
    pub caymaninterest: i64,
    pub revives: i64,
}

/// A territory block. Used by both the faction's territory list and the
/// city-wide territory lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Territory {
    pub id: String,
    pub sector: i64,
    pub size: i64,
    pub density: i64,
    pub slots: i64,
    pub daily_respect: i64,
    pub faction: i64,
    pub coordinate_x: f64,
    pub coordinate_y: f64,
    pub racket: Option<TerritoryRacket>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerritoryRacket {
    pub name: String,
    pub level: i64,
    pub reward: String,
    pub created: i64,
    pub changed: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Upgrade {
    pub id: String,
    pub branch: String,
    pub branchorder: i64,
    pub branchmultiplier: i64,
    pub name: String,
    pub level: i64,
    pub basecost: i64,
    pub ability: String,
    pub unlocked: String,
    pub unsets_completed: Option<i64>,
}
