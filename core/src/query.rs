//! Request descriptors.
//!
//! A `QueryParams` names what to fetch: the route, the selection(s), an
//! optional subject id and the auxiliary filters. Route and selection are
//! filled in by the endpoint table; callers only ever add ids and filters.
//! Turning a descriptor into a URL is `TornClient`'s job.

use std::fmt;

/// Which URL scheme an endpoint is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// `/{route}/{id}?selections=...`
    V1,
    /// `/v2/{route}/?selections=...&id=...`
    V2,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => write!(f, "v1"),
            ApiVersion::V2 => write!(f, "v2"),
        }
    }
}

/// Sort order accepted by the v2 list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    Asc,
    Desc,
}

impl Sort {
    pub fn as_str(self) -> &'static str {
        match self {
            Sort::Asc => "ASC",
            Sort::Desc => "DESC",
        }
    }
}

/// Everything needed to build one request URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub route: String,
    /// One selection, or several joined with commas.
    pub selection: String,
    /// Subject id. A path segment for v1, an `id` query parameter for v2.
    pub id: Option<String>,
    /// Extra ids for v2 multi-id requests, each sent as its own `id` parameter.
    pub ids: Vec<String>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub timestamp: Option<i64>,
    pub sort: Option<Sort>,
    pub cat: Option<String>,
}

impl QueryParams {
    pub fn new(route: impl Into<String>, selection: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            selection: selection.into(),
            ..Self::default()
        }
    }

    /// A multi-selection descriptor: the selections joined with commas.
    pub fn multi(route: impl Into<String>, selections: &[&str]) -> Self {
        Self::new(route, selections.join(","))
    }

    pub fn with_id(mut self, id: Option<impl ToString>) -> Self {
        self.id = id.map(|id| id.to_string()).filter(|id| !id.is_empty());
        self
    }

    pub fn with_range(mut self, from: Option<i64>, to: Option<i64>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// The optional auxiliary filters as `(name, value)` pairs, in the order
    /// they are appended to the query string.
    pub(crate) fn filters(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(timestamp) = self.timestamp {
            pairs.push(("timestamp", timestamp.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(cat) = self.cat.as_deref().filter(|cat| !cat.is_empty()) {
            pairs.push(("cat", cat.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_joins_selections_with_commas() {
        let params = QueryParams::multi("faction", &["armor", "weapons"]);
        assert_eq!(params.route, "faction");
        assert_eq!(params.selection, "armor,weapons");
    }

    #[test]
    fn empty_id_is_treated_as_absent() {
        let params = QueryParams::new("user", "").with_id(Some(""));
        assert!(params.id.is_none());

        let params = QueryParams::new("user", "").with_id(Some(1234));
        assert_eq!(params.id.as_deref(), Some("1234"));
    }

    #[test]
    fn filters_skip_unset_fields() {
        let params = QueryParams::new("faction", "attacks");
        assert!(params.filters().is_empty());

        let params = QueryParams {
            limit: Some(10),
            sort: Some(Sort::Desc),
            ..QueryParams::new("racing", "races").with_range(Some(1), None)
        };
        assert_eq!(
            params.filters(),
            vec![
                ("from", "1".to_string()),
                ("limit", "10".to_string()),
                ("sort", "DESC".to_string()),
            ]
        );
    }
}
