//! Payload types exchanged with the Local Restaurant Scout backend.
//!
//! Every type here is request-scoped: created when a search or suggestion
//! fetch resolves and dropped on the next one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de;

/// A location autocomplete entry.
///
/// `label` is the exact text placed into the location field when the entry is
/// chosen; it is never reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    pub label: String,
    pub name: String,
    pub address: String,
}

/// Suggestion entry as it arrives on the wire, before trimming.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSuggestion {
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub address: Option<String>,
}

/// Outbound links attached to every pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickLinks {
    pub google_maps: String,
    pub yelp_search: String,
}

/// A single restaurant recommendation, already ranked by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub name: String,
    /// Free-text address or locality.
    pub location: String,
    pub links: PickLinks,
    #[serde(default, deserialize_with = "de::number_or_none")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "de::count_or_none")]
    pub reviews: Option<u64>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub confidence: Option<String>,
    /// `None` when the backend omitted the distance or sent a non-number.
    #[serde(default, deserialize_with = "de::number_or_none")]
    pub distance_miles: Option<f64>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub why: Option<String>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub confidence_explainer: Option<String>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub hype_reason: Option<String>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub order: Option<String>,
    #[serde(default, deserialize_with = "de::flag_or_false")]
    pub also_in_strict: bool,
}

/// Diagnostic block the backend attaches to some responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DebugInfo {
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "de::count_or_none")]
    pub final_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    picks: Vec<Value>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    error: Option<String>,
    #[serde(default, deserialize_with = "de::text_or_none")]
    limitation_note: Option<String>,
    #[serde(default)]
    debug: Option<Value>,
}

/// Parsed body of `GET /lrs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    pub picks: Vec<Pick>,
    /// Logical failure reported by the backend (e.g. an unrecognised location).
    pub error: Option<String>,
    pub limitation_note: Option<String>,
    pub debug: Option<DebugInfo>,
}

impl SearchResponse {
    /// Builds a response from a decoded JSON body.
    ///
    /// Picks that do not match the [`Pick`] shape are skipped individually;
    /// a malformed `debug` block reads as an empty one.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when the body is not an object or
    /// `picks` is not an array.
    pub fn from_json(body: Value) -> Result<Self, serde_json::Error> {
        let raw: RawSearchResponse = serde_json::from_value(body)?;

        let total = raw.picks.len();
        let picks: Vec<Pick> = raw
            .picks
            .into_iter()
            .filter_map(|v| match serde_json::from_value::<Pick>(v) {
                Ok(pick) => Some(pick),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed pick");
                    None
                }
            })
            .collect();
        if picks.len() < total {
            tracing::debug!(total, parsed = picks.len(), "some picks were not parseable");
        }

        let debug = raw
            .debug
            .filter(is_truthy)
            .map(|v| serde_json::from_value::<DebugInfo>(v).unwrap_or_default());

        Ok(Self {
            picks,
            error: raw.error,
            limitation_note: raw.limitation_note,
            debug,
        })
    }
}

/// `null`, `false`, zero and `""` mean "no debug block".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
