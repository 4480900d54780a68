//! The endpoint table.
//!
//! Every implemented selection is one [`Endpoint`] constant binding its name
//! to a route, a selection, a URL scheme and the normalization it needs. The
//! namespace methods in [`crate::api`] only pick a constant and fill in the
//! caller's parameters. [`ALL`] doubles as the registry of bespoke reshapes,
//! keyed by endpoint name.

use crate::normalize::{Directive, Mode, Projection};
use crate::query::{ApiVersion, QueryParams};
use crate::reshape;

#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// `route.method`, e.g. `"faction.basic"`.
    pub name: &'static str,
    pub route: &'static str,
    pub selection: &'static str,
    pub version: ApiVersion,
    pub projection: Projection,
    pub mode: Mode,
}

impl Endpoint {
    const fn v1(name: &'static str, route: &'static str, selection: &'static str, mode: Mode) -> Self {
        Self {
            name,
            route,
            selection,
            version: ApiVersion::V1,
            projection: Projection::Selection,
            mode,
        }
    }

    const fn v2(name: &'static str, route: &'static str, selection: &'static str, mode: Mode) -> Self {
        Self {
            version: ApiVersion::V2,
            ..Self::v1(name, route, selection, mode)
        }
    }

    /// Read the payload from `key` instead of the selection.
    const fn under(self, key: &'static str) -> Self {
        Self {
            projection: Projection::Key(key),
            ..self
        }
    }

    const fn whole(self) -> Self {
        Self {
            projection: Projection::Whole,
            ..self
        }
    }

    /// Fresh query parameters for this endpoint.
    pub fn params(&self) -> QueryParams {
        QueryParams::new(self.route, self.selection)
    }

    pub fn directive<'a>(&self, params: &'a QueryParams) -> Directive<'a> {
        Directive {
            params,
            projection: self.projection,
            mode: self.mode,
        }
    }
}

/// The caller-defined multi-selection endpoint of a route: whole envelope,
/// no reshaping.
pub const fn multi(route: &'static str) -> Endpoint {
    Endpoint::v1("multi", route, "", Mode::PassThrough).whole()
}

/// Look an endpoint up by name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().find(|endpoint| endpoint.name == name)
}

const P: Mode = Mode::PassThrough;
const KV: Mode = Mode::KeyValue;
const LIST: Mode = Mode::Array(None);
const BY_ID: Mode = Mode::Array(Some("id"));

pub mod torn {
    use super::*;

    const fn v1(name: &'static str, selection: &'static str, mode: Mode) -> Endpoint {
        Endpoint::v1(name, "torn", selection, mode)
    }

    pub const BANK: Endpoint = v1("torn.bank", "bank", P);
    pub const CARDS: Endpoint = v1("torn.cards", "cards", BY_ID);
    pub const CHAIN_REPORT: Endpoint = v1("torn.chainreport", "chainreport", Mode::Bespoke(reshape::chain_report));
    pub const CITY_SHOPS: Endpoint = v1("torn.cityshops", "cityshops", Mode::Bespoke(reshape::city_shops));
    pub const COMPANIES: Endpoint = v1("torn.companies", "companies", Mode::Bespoke(reshape::company_types));
    pub const EDUCATION: Endpoint = v1("torn.education", "education", BY_ID);
    pub const FACTION_TREE: Endpoint = v1("torn.factiontree", "factiontree", Mode::Bespoke(reshape::faction_tree));
    pub const GYMS: Endpoint = v1("torn.gyms", "gyms", BY_ID);
    pub const HONORS: Endpoint = v1("torn.honors", "honors", BY_ID);
    pub const ITEMS: Endpoint = v1("torn.items", "items", BY_ID);
    pub const ITEM_DETAILS: Endpoint = v1("torn.itemdetails", "itemdetails", Mode::Bespoke(reshape::item_details));
    pub const LOG_CATEGORIES: Endpoint = v1("torn.logcategories", "logcategories", KV);
    pub const LOG_TYPES: Endpoint = v1("torn.logtypes", "logtypes", KV);
    pub const MEDALS: Endpoint = v1("torn.medals", "medals", BY_ID);
    pub const ORGANISED_CRIMES: Endpoint = v1("torn.organisedcrimes", "organisedcrimes", BY_ID);
    pub const PAWNSHOP: Endpoint = v1("torn.pawnshop", "pawnshop", P);
    pub const POKER_TABLES: Endpoint = v1("torn.pokertables", "pokertables", BY_ID);
    pub const PROPERTIES: Endpoint = v1("torn.properties", "properties", BY_ID);
    pub const RACKETS: Endpoint = v1("torn.rackets", "rackets", BY_ID);
    pub const RAIDS: Endpoint = v1("torn.raids", "raids", BY_ID);
    pub const RANKED_WARS: Endpoint = v1("torn.rankedwars", "rankedwars", Mode::Bespoke(reshape::ranked_war_list));
    pub const RANKED_WAR_REPORT: Endpoint = v1(
        "torn.rankedwarreport",
        "rankedwarreports",
        Mode::Bespoke(reshape::ranked_war_report),
    );
    pub const STATS: Endpoint = v1("torn.stats", "stats", P);
    pub const STOCKS: Endpoint = v1("torn.stocks", "stocks", LIST);
    pub const STOCK: Endpoint = v1("torn.stock", "stocks", Mode::Bespoke(reshape::stock_detail));
    pub const TIMESTAMP: Endpoint = v1("torn.timestamp", "timestamp", P);
    pub const TERRITORY: Endpoint = v1("torn.territory", "territory", BY_ID);
    pub const TERRITORY_DETAIL: Endpoint = v1(
        "torn.territory_detail",
        "territory",
        Mode::Bespoke(reshape::territory_detail),
    );
    pub const TERRITORY_NAMES: Endpoint = v1("torn.territorynames", "territorynames", LIST);
    pub const TERRITORY_WARS: Endpoint = v1("torn.territorywars", "territorywars", BY_ID);
    pub const MULTI: Endpoint = multi("torn");
}

pub mod user {
    use super::*;

    const fn v1(name: &'static str, selection: &'static str, mode: Mode) -> Endpoint {
        Endpoint::v1(name, "user", selection, mode)
    }

    pub const BASIC: Endpoint = v1("user.basic", "", P);
    pub const AMMO: Endpoint = v1("user.ammo", "ammo", P);
    pub const ATTACKS: Endpoint = v1("user.attacks", "attacks", LIST);
    pub const ATTACKS_FULL: Endpoint = v1("user.attacksfull", "attacksfull", LIST).under("attacks");
    pub const BARS: Endpoint = v1("user.bars", "bars", P).whole();
    pub const BATTLE_STATS: Endpoint = v1("user.battlestats", "battlestats", P).whole();
    pub const COOLDOWNS: Endpoint = v1("user.cooldowns", "cooldowns", P);
    pub const CRIMES: Endpoint = v1("user.crimes", "crimes", P).under("criminalrecord");
    pub const DISCORD: Endpoint = v1("user.discord", "discord", P);
    pub const PERSONAL_STATS: Endpoint = v1("user.personalstats", "personalstats", P);
    pub const MULTI: Endpoint = multi("user");
}

pub mod faction {
    use super::*;

    const fn v1(name: &'static str, selection: &'static str, mode: Mode) -> Endpoint {
        Endpoint::v1(name, "faction", selection, mode)
    }

    pub const BASIC: Endpoint = v1("faction.basic", "", Mode::Bespoke(reshape::faction_basic));
    pub const APPLICATIONS: Endpoint = v1("faction.applications", "applications", LIST);
    pub const ARMOR: Endpoint = v1("faction.armor", "armor", P);
    pub const ARMORY_NEWS: Endpoint = v1("faction.armorynews", "armorynews", BY_ID);
    pub const ATTACK_NEWS: Endpoint = v1("faction.attacknews", "attacknews", BY_ID);
    pub const ATTACKS: Endpoint = v1("faction.attacks", "attacks", LIST);
    pub const ATTACKS_FULL: Endpoint = v1("faction.attacksfull", "attacksfull", LIST).under("attacks");
    pub const BOOSTERS: Endpoint = v1("faction.boosters", "boosters", P);
    pub const CHAIN: Endpoint = v1("faction.chain", "chain", P);
    pub const CHAIN_REPORT: Endpoint = v1("faction.chainreport", "chainreport", Mode::Bespoke(reshape::chain_report));
    pub const CHAINS: Endpoint = v1("faction.chains", "chains", BY_ID);
    pub const CRIME_EXP: Endpoint = v1("faction.crimeexp", "crimeexp", LIST);
    pub const CRIME_NEWS: Endpoint = v1("faction.crimenews", "crimenews", BY_ID);
    pub const CRIMES: Endpoint = v1("faction.crimes", "crimes", Mode::Bespoke(reshape::faction_crimes));
    pub const CURRENCY: Endpoint = v1("faction.currency", "currency", P).whole();
    pub const DONATIONS: Endpoint = v1("faction.donations", "donations", BY_ID);
    pub const DRUGS: Endpoint = v1("faction.drugs", "drugs", P);
    pub const FUNDS_NEWS: Endpoint = v1("faction.fundsnews", "fundsnews", BY_ID);
    pub const MAIN_NEWS: Endpoint = v1("faction.mainnews", "mainnews", BY_ID);
    pub const MEDICAL: Endpoint = v1("faction.medical", "medical", P);
    pub const MEMBERSHIP_NEWS: Endpoint = v1("faction.membershipnews", "membershipnews", BY_ID);
    pub const POSITIONS: Endpoint = v1("faction.positions", "positions", Mode::Array(Some("title")));
    pub const RANKED_WARS: Endpoint = v1("faction.rankedwars", "rankedwars", Mode::Bespoke(reshape::ranked_war_list));
    pub const REPORTS: Endpoint = v1("faction.reports", "reports", BY_ID);
    pub const REVIVES: Endpoint = v1("faction.revives", "revives", BY_ID);
    pub const REVIVES_FULL: Endpoint = v1("faction.revivesfull", "revivesfull", BY_ID).under("revives");
    pub const STATS: Endpoint = v1("faction.stats", "stats", P);
    pub const TEMPORARY: Endpoint = v1("faction.temporary", "temporary", P);
    pub const TERRITORY: Endpoint = v1("faction.territory", "territory", BY_ID);
    pub const TERRITORY_NEWS: Endpoint = v1("faction.territorynews", "territorynews", BY_ID);
    pub const UPGRADES: Endpoint = v1("faction.upgrades", "upgrades", BY_ID);
    pub const WEAPONS: Endpoint = v1("faction.weapons", "weapons", P);
    pub const MULTI: Endpoint = multi("faction");
}

pub mod company {
    use super::*;

    const fn v1(name: &'static str, selection: &'static str, mode: Mode) -> Endpoint {
        Endpoint::v1(name, "company", selection, mode)
    }

    pub const COMPANIES: Endpoint = v1("company.companies", "companies", LIST).under("company");
    pub const EMPLOYEES: Endpoint = v1("company.employees", "employees", BY_ID).under("company_employees");
    pub const PROFILE: Endpoint = v1("company.profile", "profile", Mode::Bespoke(reshape::company_profile));
    pub const MULTI: Endpoint = multi("company");
}

pub mod market {
    use super::*;

    const fn v1(name: &'static str, selection: &'static str, mode: Mode) -> Endpoint {
        Endpoint::v1(name, "market", selection, mode)
    }

    pub const ALL: Endpoint = v1("market.all", "bazaar,itemmarket", Mode::Bespoke(reshape::market_listings));
    pub const BAZAAR: Endpoint = v1("market.bazaar", "bazaar", P);
    pub const ITEM_MARKET: Endpoint = v1("market.itemmarket", "itemmarket", P);
    pub const POINTS_MARKET: Endpoint = v1("market.pointsmarket", "pointsmarket", BY_ID);
    pub const MULTI: Endpoint = multi("market");
}

pub mod property {
    use super::*;

    pub const PROPERTY: Endpoint = Endpoint::v1("property.property", "property", "property", P);
    pub const MULTI: Endpoint = multi("property");
}

pub mod racing {
    use super::*;

    const fn v2(name: &'static str, selection: &'static str) -> Endpoint {
        Endpoint::v2(name, "racing", selection, P)
    }

    pub const CARS: Endpoint = v2("racing.cars", "cars");
    pub const CAR_UPGRADES: Endpoint = v2("racing.carupgrades", "carupgrades");
    pub const RACES: Endpoint = v2("racing.races", "races");
    pub const RACE: Endpoint = v2("racing.race", "race");
    pub const RECORDS: Endpoint = v2("racing.records", "records");
    pub const TRACKS: Endpoint = v2("racing.tracks", "tracks");
    pub const LOOKUP: Endpoint = v2("racing.lookup", "lookup").under("selections");
}

pub mod forum {
    use super::*;

    const fn v2(name: &'static str, selection: &'static str) -> Endpoint {
        Endpoint::v2(name, "forum", selection, P)
    }

    pub const CATEGORIES: Endpoint = v2("forum.categories", "categories");
    pub const POSTS: Endpoint = v2("forum.posts", "posts").whole();
    pub const THREAD: Endpoint = v2("forum.thread", "thread");
    pub const THREADS: Endpoint = v2("forum.threads", "threads");
}

pub mod key {
    use super::*;

    pub const INFO: Endpoint = Endpoint::v1("key.info", "key", "info", P).whole();
}

/// Every implemented endpoint except the per-route multi-selections.
pub const ALL: &[Endpoint] = &[
    torn::BANK,
    torn::CARDS,
    torn::CHAIN_REPORT,
    torn::CITY_SHOPS,
    torn::COMPANIES,
    torn::EDUCATION,
    torn::FACTION_TREE,
    torn::GYMS,
    torn::HONORS,
    torn::ITEMS,
    torn::ITEM_DETAILS,
    torn::LOG_CATEGORIES,
    torn::LOG_TYPES,
    torn::MEDALS,
    torn::ORGANISED_CRIMES,
    torn::PAWNSHOP,
    torn::POKER_TABLES,
    torn::PROPERTIES,
    torn::RACKETS,
    torn::RAIDS,
    torn::RANKED_WARS,
    torn::RANKED_WAR_REPORT,
    torn::STATS,
    torn::STOCKS,
    torn::STOCK,
    torn::TIMESTAMP,
    torn::TERRITORY,
    torn::TERRITORY_DETAIL,
    torn::TERRITORY_NAMES,
    torn::TERRITORY_WARS,
    user::BASIC,
    user::AMMO,
    user::ATTACKS,
    user::ATTACKS_FULL,
    user::BARS,
    user::BATTLE_STATS,
    user::COOLDOWNS,
    user::CRIMES,
    user::DISCORD,
    user::PERSONAL_STATS,
    faction::BASIC,
    faction::APPLICATIONS,
    faction::ARMOR,
    faction::ARMORY_NEWS,
    faction::ATTACK_NEWS,
    faction::ATTACKS,
    faction::ATTACKS_FULL,
    faction::BOOSTERS,
    faction::CHAIN,
    faction::CHAIN_REPORT,
    faction::CHAINS,
    faction::CRIME_EXP,
    faction::CRIME_NEWS,
    faction::CRIMES,
    faction::CURRENCY,
    faction::DONATIONS,
    faction::DRUGS,
    faction::FUNDS_NEWS,
    faction::MAIN_NEWS,
    faction::MEDICAL,
    faction::MEMBERSHIP_NEWS,
    faction::POSITIONS,
    faction::RANKED_WARS,
    faction::REPORTS,
    faction::REVIVES,
    faction::REVIVES_FULL,
    faction::STATS,
    faction::TEMPORARY,
    faction::TERRITORY,
    faction::TERRITORY_NEWS,
    faction::UPGRADES,
    faction::WEAPONS,
    company::COMPANIES,
    company::EMPLOYEES,
    company::PROFILE,
    market::ALL,
    market::BAZAAR,
    market::ITEM_MARKET,
    market::POINTS_MARKET,
    property::PROPERTY,
    racing::CARS,
    racing::CAR_UPGRADES,
    racing::RACES,
    racing::RACE,
    racing::RECORDS,
    racing::TRACKS,
    racing::LOOKUP,
    forum::CATEGORIES,
    forum::POSTS,
    forum::THREAD,
    forum::THREADS,
    key::INFO,
];
