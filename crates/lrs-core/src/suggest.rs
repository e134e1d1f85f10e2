//! Cleaning and "city-like" filtering for location suggestions.
//!
//! The autocomplete dropdown prefers city/region-level entries over exact
//! business addresses. Nothing here falls back to non-city-like entries: if
//! none qualify, the dropdown stays empty.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::types::{LocationSuggestion, RawSuggestion};

/// Maximum number of entries shown in the dropdown.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

static LEADING_STREET_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s").expect("static regex must compile"));

const SUITE_MARKERS: [&str; 3] = [" ste ", " suite ", "#"];

/// Extracts suggestions from a `GET /suggest` body.
///
/// A body without a `suggestions` array yields nothing. Entries that are not
/// objects are skipped; `label`, `name`, and `address` are trimmed and entries
/// whose label ends up empty are dropped.
#[must_use]
pub fn normalize_suggestions(body: &Value) -> Vec<LocationSuggestion> {
    let Some(entries) = body.get("suggestions").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<RawSuggestion>(entry.clone()).ok())
        .map(|raw| LocationSuggestion {
            label: raw.label.unwrap_or_default().trim().to_string(),
            name: raw.name.unwrap_or_default().trim().to_string(),
            address: raw.address.unwrap_or_default().trim().to_string(),
        })
        .filter(|s| !s.label.is_empty())
        .collect()
}

/// Returns `true` when `label` reads like a city or region rather than a
/// street address: it has a comma, no leading street number, and no suite or
/// unit marker.
#[must_use]
pub fn looks_city_like(label: &str) -> bool {
    let lowered = label.to_lowercase();
    let has_comma = lowered.contains(',');
    let has_street_number = LEADING_STREET_NUMBER.is_match(&lowered);
    let has_suite = SUITE_MARKERS.iter().any(|m| lowered.contains(m));
    has_comma && !has_street_number && !has_suite
}

/// Keeps the first `limit` city-like suggestions, preserving backend order.
#[must_use]
pub fn filter_city_like(
    suggestions: Vec<LocationSuggestion>,
    limit: usize,
) -> Vec<LocationSuggestion> {
    suggestions
        .into_iter()
        .filter(|s| looks_city_like(&s.label))
        .take(limit)
        .collect()
}
