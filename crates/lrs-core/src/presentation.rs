//! User-facing copy shared by every screen.

use crate::mode::Mode;
use crate::types::Pick;

/// Shown when a search is submitted with an empty location.
pub const EMPTY_LOCATION_NOTE: &str =
    "Please type a city or area first (example: “Los Angeles, CA”).";

/// Shown for any transport or decoding failure of the main search.
pub const SERVER_UNREACHABLE_NOTE: &str = "Could not reach the server. Please try again.";

pub const EMPTY_STATE_TITLE: &str = "No strong matches nearby";

pub const EMPTY_STATE_HINT: &str = "Try a simpler food word (like “tacos” instead of “birria”), or add a nearby city for better coverage.";

pub const LOADING_HINT: &str =
    "Filtering out chains and weak picks… this can take a few seconds.";

pub const SUGGESTIONS_LOADING_HINT: &str = "Finding locations…";

pub const PHOTO_ATTRIBUTION: &str = "Photo from Google • Tap to view";

pub const ALSO_IN_STRICT: &str = "Also shows up in Top Local Picks.";

pub const YELP_TIP: &str =
    "Tip: If the Yelp app gets stuck, close it first, then tap the link again.";

/// Quick-pick cravings offered under the cuisine field.
pub const CUISINE_PRESETS: [&str; 12] = [
    "tacos",
    "pizza",
    "sushi",
    "ramen",
    "burgers",
    "bbq",
    "breakfast",
    "thai",
    "pho",
    "coffee",
    "diner",
    "birria",
];

/// Line describing the mode the backend actually ran and how many picks are
/// on screen after the guardrails.
#[must_use]
pub fn debug_line(backend_mode: Option<&str>, shown: usize) -> String {
    let label = Mode::label_for_wire(backend_mode.unwrap_or_default());
    format!("You’re in {label} mode. I’m showing {shown} picks.")
}

/// Text handed to the platform share sheet for a pick.
#[must_use]
pub fn share_message(name: &str, google_maps_url: &str) -> String {
    if google_maps_url.is_empty() {
        name.to_string()
    } else {
        format!("{name}\n{google_maps_url}")
    }
}

/// `⭐ 4.7 (812) • Local trust: High`, with `-` standing in for missing values.
#[must_use]
pub fn rating_line(pick: &Pick) -> String {
    let rating = pick.rating.map_or_else(|| "-".to_string(), |r| r.to_string());
    let reviews = pick.reviews.map_or_else(|| "-".to_string(), |r| r.to_string());
    let confidence = pick.confidence.as_deref().unwrap_or("-");
    format!("⭐ {rating} ({reviews}) • Local trust: {confidence}")
}

/// `Distance: 2.4 mi`, or `None` if the backend gave no numeric distance.
#[must_use]
pub fn distance_line(pick: &Pick) -> Option<String> {
    pick.distance_miles.map(|d| format!("Distance: {d} mi"))
}

/// Hype reasons only appear when browsing in hype mode.
#[must_use]
pub fn hype_line(pick: &Pick, mode: Mode) -> Option<String> {
    match (mode, pick.hype_reason.as_deref()) {
        (Mode::Hype, Some(reason)) => Some(format!("🔥 Hype reason: {reason}")),
        _ => None,
    }
}

/// Cuisine presets that exactly match the current craving (case-insensitive).
#[must_use]
pub fn active_preset(cuisine: &str) -> Option<&'static str> {
    let lowered = cuisine.trim().to_lowercase();
    CUISINE_PRESETS.iter().copied().find(|p| *p == lowered)
}
