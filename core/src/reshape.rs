//! Bespoke reshapes for endpoints the generic modes cannot describe.
//!
//! Each function takes the whole decoded success envelope (the error check has
//! already happened) and returns the value the endpoint's DTO is decoded
//! from. They are registered by endpoint name in [`crate::endpoints`].
//! Missing sub-objects are left missing so the DTO defaults apply.

use serde_json::{json, Map, Value};

use crate::normalize::fix_string_array;
use crate::query::QueryParams;

/// `faction/?selections=`: members keyed by id, peace treaties as
/// `{faction_id: until}`, ranked wars keyed by id with nested factions keyed
/// by id. Only the first ranked war is kept.
pub fn faction_basic(mut body: Value, _: &QueryParams) -> Value {
    fix_field(&mut body, "members", Some("id"));

    if let Some(slot) = body.get_mut("peace") {
        let peace = match slot.take() {
            Value::Object(treaties) => treaties
                .into_iter()
                .filter_map(|(faction_id, until)| {
                    let faction_id = faction_id.parse::<i64>().ok()?;
                    Some(json!({ "faction_id": faction_id, "until": until }))
                })
                .collect(),
            Value::Array(treaties) => treaties,
            _ => Vec::new(),
        };
        *slot = Value::Array(peace);
    }

    if let Some(slot) = body.get_mut("ranked_wars") {
        *slot = ranked_wars(slot.take()).into_iter().next().unwrap_or(Value::Null);
    }

    body
}

/// `chainreport` on the faction and torn routes: the report object with its
/// members turned into a plain list.
pub fn chain_report(mut body: Value, _: &QueryParams) -> Value {
    let mut report = take(&mut body, "chainreport");
    if let Some(slot) = report.get_mut("members") {
        *slot = Value::Array(records(slot.take()));
    }
    report
}

/// `faction/?selections=crimes`: crimes keyed by id; each participant arrives
/// as a single-entry `{user_id: status-or-null}` object.
pub fn faction_crimes(mut body: Value, _: &QueryParams) -> Value {
    let mut crimes = fix_string_array(take(&mut body, "crimes"), Some("id"));
    for crime in &mut crimes {
        if let Some(slot) = crime.get_mut("participants") {
            *slot = Value::Array(participants(slot.take()));
        }
    }
    Value::Array(crimes)
}

/// `rankedwars` on the faction and torn routes.
pub fn ranked_war_list(mut body: Value, _: &QueryParams) -> Value {
    Value::Array(ranked_wars(take(&mut body, "rankedwars")))
}

/// `torn/?selections=cityshops`: shops keyed by id, inventories keyed by id.
pub fn city_shops(mut body: Value, _: &QueryParams) -> Value {
    let mut shops = fix_string_array(take(&mut body, "cityshops"), Some("id"));
    for shop in &mut shops {
        fix_field(shop, "inventory", Some("id"));
    }
    Value::Array(shops)
}

/// `torn/?selections=companies`: company types keyed by id; positions,
/// specials and stock keyed by name.
pub fn company_types(mut body: Value, _: &QueryParams) -> Value {
    let mut companies = fix_string_array(take(&mut body, "companies"), Some("id"));
    for company in &mut companies {
        for field in ["positions", "specials", "stock"] {
            fix_field(company, field, Some("name"));
        }
    }
    Value::Array(companies)
}

/// `torn/?selections=factiontree`: branches keyed by id, each an object of
/// upgrades keyed by id.
pub fn faction_tree(mut body: Value, _: &QueryParams) -> Value {
    let branches = match take(&mut body, "factiontree") {
        Value::Object(branches) => branches
            .into_iter()
            .map(|(id, upgrades)| json!({ "id": id, "branch": fix_string_array(upgrades, Some("id")) }))
            .collect(),
        _ => Vec::new(),
    };
    Value::Array(branches)
}

/// `torn/{uid}?selections=itemdetails`: bonuses keyed by id, when present.
pub fn item_details(mut body: Value, _: &QueryParams) -> Value {
    let mut details = take(&mut body, "itemdetails");
    fix_field(&mut details, "bonuses", Some("id"));
    details
}

/// `torn/{id}?selections=rankedwarreports`, served under `rankedwarreport`.
pub fn ranked_war_report(mut body: Value, _: &QueryParams) -> Value {
    let mut report = take(&mut body, "rankedwarreport");
    fix_field(&mut report, "factions", Some("id"));
    if let Some(factions) = report.get_mut("factions").and_then(Value::as_array_mut) {
        for faction in factions {
            if let Some(rewards) = faction.get_mut("rewards") {
                fix_field(rewards, "items", Some("id"));
            }
        }
    }
    fix_field(&mut report, "members", Some("id"));
    report
}

/// `torn/{id}?selections=stocks`: the one requested stock out of the
/// id-keyed collection, with the id injected.
pub fn stock_detail(mut body: Value, params: &QueryParams) -> Value {
    keyed_record(take(&mut body, "stocks"), params.id.as_deref().unwrap_or_default())
}

/// `torn/{code}?selections=territory`: the one requested territory.
pub fn territory_detail(mut body: Value, params: &QueryParams) -> Value {
    keyed_record(take(&mut body, "territory"), params.id.as_deref().unwrap_or_default())
}

/// `company/?selections=profile`: served under `company`, employees keyed by id.
pub fn company_profile(mut body: Value, _: &QueryParams) -> Value {
    let mut company = take(&mut body, "company");
    fix_field(&mut company, "employees", Some("id"));
    company
}

/// `market/{id}?selections=bazaar,itemmarket`: both listings in one sequence,
/// bazaar first.
pub fn market_listings(mut body: Value, _: &QueryParams) -> Value {
    let mut listings = fix_string_array(take(&mut body, "bazaar"), None);
    listings.extend(fix_string_array(take(&mut body, "itemmarket"), None));
    Value::Array(listings)
}

fn take(body: &mut Value, key: &str) -> Value {
    body.get_mut(key).map(Value::take).unwrap_or(Value::Null)
}

/// Replace an id-keyed collection field with its record sequence. Absent
/// fields stay absent.
fn fix_field(record: &mut Value, field: &str, key_field: Option<&str>) {
    if let Some(slot) = record.get_mut(field) {
        *slot = Value::Array(fix_string_array(slot.take(), key_field));
    }
}

/// The object values of a collection, dropping everything else.
fn records(collection: Value) -> Vec<Value> {
    fix_string_array(collection, None)
        .into_iter()
        .filter(Value::is_object)
        .collect()
}

fn ranked_wars(collection: Value) -> Vec<Value> {
    let mut wars = fix_string_array(collection, Some("id"));
    for war in &mut wars {
        fix_field(war, "factions", Some("id"));
    }
    wars
}

fn participants(value: Value) -> Vec<Value> {
    let entries: Vec<(String, Value)> = match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(entry) => Some(entry),
                _ => None,
            })
            .flatten()
            .collect(),
        Value::Object(entries) => entries.into_iter().collect(),
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .map(|(id, status)| {
            let mut participant = match status {
                Value::Object(status) => status,
                _ => Map::new(),
            };
            participant.insert("id".to_string(), Value::String(id));
            Value::Object(participant)
        })
        .collect()
}

fn keyed_record(collection: Value, key: &str) -> Value {
    let Value::Object(mut collection) = collection else {
        return Value::Null;
    };
    match collection.remove(key) {
        Some(Value::Object(mut record)) => {
            record.insert("id".to_string(), Value::String(key.to_string()));
            Value::Object(record)
        }
        _ => Value::Null,
    }
}
