//! Company route DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{LastAction, Status};

/// A company as listed by the `companies` selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    #[serde(rename = "ID")]
    pub id: i64,
    pub company_type: i64,
    pub rating: i64,
    pub name: String,
    pub director: i64,
    pub employees_hired: i64,
    pub employees_capacity: i64,
    pub daily_income: i64,
    pub daily_customers: i64,
    pub weekly_income: i64,
    pub weekly_customers: i64,
    pub days_old: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyEmployee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub days_in_company: i64,
    pub wage: Option<i64>,
    pub manual_labor: Option<i64>,
    pub intelligence: Option<i64>,
    pub endurance: Option<i64>,
    pub effectiveness: Value,
    pub last_action: LastAction,
    pub status: Status,
}

/// The `profile` selection: company summary plus its employees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    #[serde(rename = "ID")]
    pub id: i64,
    pub company_type: i64,
    pub rating: i64,
    pub name: String,
    pub director: i64,
    pub employees_hired: i64,
    pub employees_capacity: i64,
    pub daily_income: i64,
    pub daily_customers: i64,
    pub weekly_income: i64,
    pub weekly_customers: i64,
    pub days_old: i64,
    pub employees: Vec<CompanyEmployee>,
}
