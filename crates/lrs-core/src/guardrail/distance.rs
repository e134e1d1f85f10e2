//! Client-side distance cap enforcement.

use crate::mode::Mode;
use crate::types::Pick;

/// Splits `picks` into those within `mode`'s cap, returning the kept picks
/// and how many were dropped.
///
/// Only a pick with a numeric distance strictly above the cap is dropped;
/// a pick with no distance is kept.
#[must_use]
pub fn enforce_cap(mode: Mode, picks: Vec<Pick>) -> (Vec<Pick>, usize) {
    let cap = f64::from(mode.cap_miles());
    let before = picks.len();
    let kept: Vec<Pick> = picks
        .into_iter()
        .filter(|p| p.distance_miles.is_none_or(|d| d <= cap))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// Note explaining how many picks were hidden for being too far away.
#[must_use]
pub fn dropped_note(mode: Mode, dropped: usize) -> Option<String> {
    if dropped == 0 {
        return None;
    }
    let plural = if dropped == 1 { "" } else { "s" };
    Some(format!(
        "Heads up: I hid {dropped} result{plural} that were beyond {cap} miles for {label}.",
        cap = mode.cap_miles(),
        label = mode.label(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PickLinks;

    fn pick(distance: Option<f64>) -> Pick {
        Pick {
            name: format!("{distance:?}"),
            location: "Austin, TX".to_string(),
            links: PickLinks {
                google_maps: String::new(),
                yelp_search: String::new(),
            },
            rating: None,
            reviews: None,
            confidence: None,
            distance_miles: distance,
            photo_url: None,
            why: None,
            confidence_explainer: None,
            hype_reason: None,
            order: None,
            also_in_strict: false,
        }
    }

    #[test]
    fn strict_cap_keeps_boundary_and_drops_beyond() {
        let picks = [3.0, 10.0, 10.1, 25.0].map(|d| pick(Some(d))).to_vec();
        let (kept, dropped) = enforce_cap(Mode::Strict, picks);
        let distances: Vec<_> = kept.iter().filter_map(|p| p.distance_miles).collect();
        assert_eq!(distances, vec![3.0, 10.0]);
        assert_eq!(dropped, 2);
    }

    #[test]
    fn missing_distance_is_always_kept() {
        let (kept, dropped) = enforce_cap(Mode::Strict, vec![pick(None), pick(Some(99.0))]);
        assert_eq!(kept.len(), 1);
        assert!(kept[0].distance_miles.is_none());
        assert_eq!(dropped, 1);
    }

    #[test]
    fn hype_cap_is_wider() {
        let (kept, dropped) = enforce_cap(Mode::Hype, vec![pick(Some(24.9)), pick(Some(25.0))]);
        assert_eq!(kept.len(), 2);
        assert_eq!(dropped, 0);
    }

    #[test]
    fn note_pluralizes() {
        let one = dropped_note(Mode::Best, 1).unwrap();
        assert!(one.contains("1 result that"), "{one}");
        let two = dropped_note(Mode::Strict, 2).unwrap();
        assert_eq!(
            two,
            "Heads up: I hid 2 results that were beyond 10 miles for Top Local Picks."
        );
        assert!(dropped_note(Mode::Hype, 0).is_none());
    }
}
