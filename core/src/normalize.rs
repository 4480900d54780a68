//! Response normalization.
//!
//! # Design
//! The Torn API mixes encodings freely: the same conceptual list arrives as
//! an array on one endpoint and as an object keyed by id on the next, and an
//! error envelope has the same outer shape as a success. Every endpoint
//! therefore goes through one routine that
//!
//! 1. decodes the body, falling back to [`TornApiError::unknown`] when there is
//!    nothing usable,
//! 2. returns the domain error when the body has an `error` key (presence, not
//!    truthiness: `code: 0` is a real error),
//! 3. projects the payload out of the envelope and reshapes it according to
//!    the endpoint's [`Mode`],
//! 4. decodes the result into the endpoint's DTO.
//!
//! Nothing here performs I/O or keeps state; the same input always yields the
//! same output.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiResult, TornApiError, TransportError};
use crate::http::HttpResponse;
use crate::query::QueryParams;
use crate::types::KeyValue;

/// A bespoke reshape: takes the whole decoded envelope and returns the value
/// to decode into the endpoint's type.
pub type Reshape = fn(Value, &QueryParams) -> Value;

/// Which part of the envelope holds the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// `body[selection]`, or the whole body when the selection is empty.
    Selection,
    /// The whole body, e.g. when the selection's fields sit at the top level.
    Whole,
    /// `body[key]` for endpoints that nest results under another name than
    /// the selection they were requested with.
    Key(&'static str),
}

/// How the projected payload is reshaped.
#[derive(Debug, Clone, Copy)]
pub enum Mode {
    PassThrough,
    /// Id-keyed collection to sequence, injecting the key under the given
    /// field name when there is one.
    Array(Option<&'static str>),
    /// Scalar-valued id-keyed collection to `{key, value}` pairs.
    KeyValue,
    Bespoke(Reshape),
}

/// Normalization instructions for one call.
#[derive(Debug, Clone, Copy)]
pub struct Directive<'a> {
    pub params: &'a QueryParams,
    pub projection: Projection,
    pub mode: Mode,
}

/// True when `body` is an error envelope, i.e. an object with an `error` key.
pub fn is_error_envelope(body: &Value) -> bool {
    body.as_object().is_some_and(|body| body.contains_key("error"))
}

/// Normalize the outcome of a transport call. Transport failures collapse to
/// the fallback error.
pub fn normalize_outcome<T: DeserializeOwned>(
    outcome: Result<HttpResponse, TransportError>,
    directive: &Directive<'_>,
) -> ApiResult<T> {
    match outcome {
        Ok(response) => normalize(&response, directive),
        Err(e) => {
            tracing::warn!(
                error = %e,
                route = %directive.params.route,
                selection = %directive.params.selection,
                "torn api transport failure"
            );
            Err(TornApiError::unknown())
        }
    }
}

/// Classify a response and reshape its payload into `T`.
pub fn normalize<T: DeserializeOwned>(response: &HttpResponse, directive: &Directive<'_>) -> ApiResult<T> {
    let params = directive.params;
    let body: Value = match serde_json::from_str(&response.body) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                error = %e,
                status = response.status,
                route = %params.route,
                selection = %params.selection,
                "torn api response has no usable body"
            );
            return Err(TornApiError::unknown());
        }
    };

    if let Some(error) = domain_error(&body) {
        tracing::debug!(code = error.code, route = %params.route, selection = %params.selection, "torn api error");
        return Err(error);
    }

    if !response.is_success() {
        tracing::warn!(status = response.status, route = %params.route, "torn api returned a non-success status");
        return Err(TornApiError::unknown());
    }

    serde_json::from_value(shape(body, directive)).map_err(|e| {
        tracing::warn!(
            error = %e,
            route = %params.route,
            selection = %params.selection,
            "torn api payload does not match the expected shape"
        );
        TornApiError::unknown()
    })
}

/// Project and reshape a success envelope according to the directive.
pub fn shape(body: Value, directive: &Directive<'_>) -> Value {
    match directive.mode {
        Mode::Bespoke(reshape) => reshape(body, directive.params),
        Mode::PassThrough => project(body, directive),
        Mode::Array(key_field) => Value::Array(fix_string_array(project(body, directive), key_field)),
        Mode::KeyValue => Value::Array(
            key_value_pairs(project(body, directive))
                .into_iter()
                .map(Value::from)
                .collect(),
        ),
    }
}

/// Turn an id-keyed collection into a sequence of records.
///
/// With a key field, every object value gets its key injected under that
/// name and non-object values are dropped. Without one, all values are kept
/// as they are. Arrays are treated as collections keyed by index; anything
/// else (including an absent payload) yields an empty sequence.
pub fn fix_string_array(collection: Value, key_field: Option<&str>) -> Vec<Value> {
    let entries: Vec<(String, Value)> = match collection {
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        _ => return Vec::new(),
    };

    match key_field {
        None => entries.into_iter().map(|(_, value)| value).collect(),
        Some(field) => entries
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Object(mut record) => {
                    record.insert(field.to_string(), Value::String(key));
                    Some(Value::Object(record))
                }
                _ => None,
            })
            .collect(),
    }
}

/// Turn a scalar-valued id-keyed collection into `{key, value}` pairs.
pub fn key_value_pairs(collection: Value) -> Vec<KeyValue> {
    match collection {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| KeyValue { key, value })
            .collect(),
        _ => Vec::new(),
    }
}

fn project(mut body: Value, directive: &Directive<'_>) -> Value {
    let key = match directive.projection {
        Projection::Whole => return body,
        Projection::Selection if directive.params.selection.is_empty() => return body,
        Projection::Selection => directive.params.selection.as_str(),
        Projection::Key(key) => key,
    };
    body.get_mut(key).map(Value::take).unwrap_or(Value::Null)
}

fn domain_error(body: &Value) -> Option<TornApiError> {
    if !is_error_envelope(body) {
        return None;
    }
    let error = body.get("error").cloned().unwrap_or(Value::Null);
    Some(serde_json::from_value(error).unwrap_or_else(|_| TornApiError::unknown()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct News {
        id: String,
        news: String,
        timestamp: i64,
    }

    fn params(selection: &str) -> QueryParams {
        QueryParams::new("faction", selection)
    }

    fn directive(params: &QueryParams, mode: Mode) -> Directive<'_> {
        Directive {
            params,
            projection: Projection::Selection,
            mode,
        }
    }

    fn respond(body: Value) -> HttpResponse {
        HttpResponse::ok(body.to_string())
    }

    #[test]
    fn array_mode_injects_keys_in_order() {
        let params = params("mainnews");
        let body = json!({"mainnews": {
            "zz": {"news": "first", "timestamp": 3},
            "aa": {"news": "second", "timestamp": 2},
            "mm": {"news": "third", "timestamp": 1},
        }});
        let news: Vec<News> = normalize(&respond(body), &directive(&params, Mode::Array(Some("id")))).unwrap();
        let ids: Vec<&str> = news.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["zz", "aa", "mm"]);
        assert_eq!(news[1].news, "second");
    }

    #[test]
    fn array_mode_skips_non_object_values() {
        let collection = json!({"1": {"a": 1}, "2": 7, "3": "text", "4": null, "5": {"a": 2}});
        let records = fix_string_array(collection, Some("id"));
        assert_eq!(records, vec![json!({"a": 1, "id": "1"}), json!({"a": 2, "id": "5"})]);
    }

    #[test]
    fn array_mode_without_key_field_keeps_all_values() {
        let records = fix_string_array(json!({"b": 2, "a": {"x": 1}}), None);
        assert_eq!(records, vec![json!(2), json!({"x": 1})]);

        let records = fix_string_array(json!([5, 4, 3]), None);
        assert_eq!(records, vec![json!(5), json!(4), json!(3)]);
    }

    #[test]
    fn array_mode_on_absent_selection_is_empty() {
        let params = params("chains");
        let got: Vec<Value> = normalize(&respond(json!({"other": {}})), &directive(&params, Mode::Array(Some("id")))).unwrap();
        assert!(got.is_empty());

        let got: Vec<Value> = normalize(&respond(json!({"chains": null})), &directive(&params, Mode::Array(None))).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn key_value_mode_keeps_pairs_in_order() {
        let pairs = key_value_pairs(json!({"a": "x", "b": "y"}));
        assert_eq!(
            pairs,
            vec![
                KeyValue { key: "a".into(), value: json!("x") },
                KeyValue { key: "b".into(), value: json!("y") },
            ]
        );

        let params = QueryParams::new("torn", "logtypes");
        let got: Vec<KeyValue> = normalize(
            &respond(json!({"logtypes": {"100": "Attack", "85": "Bank"}})),
            &directive(&params, Mode::KeyValue),
        )
        .unwrap();
        assert_eq!(got[0].key, "100");
        assert_eq!(got[1].value, json!("Bank"));
    }

    #[test]
    fn error_envelope_wins_in_every_mode() {
        fn upper(_: Value, _: &QueryParams) -> Value {
            json!("reshaped")
        }

        let params = params("basic");
        for code in [0, 2, 5, 16] {
            let body = json!({"error": {"code": code, "error": "nope"}});
            for mode in [Mode::PassThrough, Mode::Array(Some("id")), Mode::KeyValue, Mode::Bespoke(upper)] {
                let err = normalize::<Value>(&respond(body.clone()), &directive(&params, mode)).unwrap_err();
                assert_eq!(err, TornApiError::new(code, "nope"));
            }
        }
    }

    #[test]
    fn error_detection_is_by_presence() {
        assert!(is_error_envelope(&json!({"error": {"code": 0, "error": ""}})));
        assert!(is_error_envelope(&json!({"error": null})));
        assert!(!is_error_envelope(&json!({"code": 0})));
        assert!(!is_error_envelope(&json!([{"error": 1}])));
    }

    #[test]
    fn malformed_error_payload_falls_back() {
        let params = params("basic");
        let err = normalize::<Value>(&respond(json!({"error": "boom"})), &directive(&params, Mode::PassThrough)).unwrap_err();
        assert_eq!(err, TornApiError::unknown());
    }

    #[test]
    fn transport_failure_is_unknown_error() {
        let params = params("basic");
        let d = directive(&params, Mode::PassThrough);
        for _ in 0..3 {
            let err = normalize_outcome::<Value>(Err(TransportError::Request("refused".into())), &d).unwrap_err();
            assert_eq!(err, TornApiError::unknown());
        }
    }

    #[test]
    fn empty_or_garbage_body_is_unknown_error() {
        let params = params("basic");
        let d = directive(&params, Mode::PassThrough);
        for body in ["", "   ", "<html>502</html>"] {
            let err = normalize::<Value>(&HttpResponse::ok(body), &d).unwrap_err();
            assert_eq!(err, TornApiError::unknown());
        }
    }

    #[test]
    fn empty_but_valid_body_is_not_an_error() {
        let params = QueryParams::new("faction", "");
        let got: serde_json::Map<String, Value> =
            normalize(&HttpResponse::ok("{}"), &directive(&params, Mode::PassThrough)).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn non_success_status_without_error_body_is_unknown() {
        let params = params("basic");
        let response = HttpResponse {
            status: 503,
            headers: Vec::new(),
            body: r#"{"basic":{}}"#.to_string(),
        };
        let err = normalize::<Value>(&response, &directive(&params, Mode::PassThrough)).unwrap_err();
        assert_eq!(err, TornApiError::unknown());
    }

    #[test]
    fn non_success_status_with_error_body_keeps_domain_error() {
        let params = params("basic");
        let response = HttpResponse {
            status: 429,
            headers: Vec::new(),
            body: r#"{"error":{"code":5,"error":"Too many requests"}}"#.to_string(),
        };
        let err = normalize::<Value>(&response, &directive(&params, Mode::PassThrough)).unwrap_err();
        assert_eq!(err, TornApiError::new(5, "Too many requests"));
    }

    #[test]
    fn type_mismatch_is_unknown_error() {
        let params = params("timestamp");
        let err = normalize::<i64>(&respond(json!({"timestamp": "soon"})), &directive(&params, Mode::PassThrough)).unwrap_err();
        assert_eq!(err, TornApiError::unknown());
    }

    #[test]
    fn projection_override_and_whole_body() {
        let params = params("attacksfull");
        let body = json!({"attacks": {"1": {"code": "a"}}});
        let d = Directive {
            params: &params,
            projection: Projection::Key("attacks"),
            mode: Mode::Array(None),
        };
        assert_eq!(shape(body.clone(), &d), json!([{"code": "a"}]));

        let d = Directive {
            params: &params,
            projection: Projection::Whole,
            mode: Mode::PassThrough,
        };
        assert_eq!(shape(body.clone(), &d), body);
    }

    #[test]
    fn empty_selection_projects_whole_body() {
        let params = QueryParams::new("user", "");
        let body = json!({"name": "Duke", "level": 100});
        assert_eq!(shape(body.clone(), &directive(&params, Mode::PassThrough)), body);
    }

    #[test]
    fn multi_selection_passes_envelope_through() {
        let params = QueryParams::multi("faction", &["armor", "weapons"]);
        let d = Directive {
            params: &params,
            projection: Projection::Whole,
            mode: Mode::PassThrough,
        };
        let body = json!({"armor": [{"ID": 1}], "weapons": [{"ID": 2}]});
        let got: serde_json::Map<String, Value> = normalize(&respond(body), &d).unwrap();
        let keys: Vec<&str> = got.keys().map(String::as_str).collect();
        assert_eq!(keys, ["armor", "weapons"]);
        assert_eq!(got["weapons"], json!([{"ID": 2}]));
    }

    #[test]
    fn normalizing_twice_gives_equal_results() {
        let params = params("donations");
        let d = directive(&params, Mode::Array(Some("id")));
        let response = respond(json!({"donations": {"1": {"name": "a"}, "2": 3}}));
        let first: ApiResult<Vec<Value>> = normalize(&response, &d);
        let second: ApiResult<Vec<Value>> = normalize(&response, &d);
        assert_eq!(first, second);

        let error = HttpResponse::ok(r#"{"error":{"code":0,"error":"Unknown error"}}"#);
        assert_eq!(normalize::<Vec<Value>>(&error, &d), normalize::<Vec<Value>>(&error, &d));
    }
}
