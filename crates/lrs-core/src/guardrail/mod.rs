//! Display guardrails applied to picks the backend already ranked.
//!
//! The filter is a pure, total function: it does no I/O and cannot fail. It
//! drops picks beyond the mode's distance cap and assembles a single advisory
//! note from the backend's limitation note, the distance-drop note, and the
//! country-mismatch note, in that order.

mod country;
mod distance;

pub use country::{mismatch_note, CountryDetector, CountryLexicon};
pub use distance::{dropped_note, enforce_cap};

use crate::mode::Mode;
use crate::types::Pick;

/// Separator between individual notes in the combined advisory.
pub const NOTE_SEPARATOR: &str = "\n\n";

/// Picks that survived the guardrails plus the combined advisory text.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardrailOutcome {
    pub picks: Vec<Pick>,
    pub dropped: usize,
    /// Combined advisory; empty when there is nothing to say.
    pub note: String,
}

/// Guardrail filter parameterised over the country detection strategy.
#[derive(Debug, Clone, Default)]
pub struct GuardrailFilter<D = CountryLexicon> {
    detector: D,
}

impl<D: CountryDetector> GuardrailFilter<D> {
    #[must_use]
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    /// Applies the distance cap for `mode`, then checks the surviving picks
    /// for a country conflict with `user_location`.
    #[must_use]
    pub fn apply(
        &self,
        user_location: &str,
        mode: Mode,
        picks: Vec<Pick>,
        backend_note: Option<&str>,
    ) -> GuardrailOutcome {
        let (picks, dropped) = enforce_cap(mode, picks);
        if dropped > 0 {
            tracing::info!(
                dropped,
                cap_miles = mode.cap_miles(),
                mode = %mode,
                "hid picks beyond distance cap"
            );
        }

        let distance = dropped_note(mode, dropped);
        let country = mismatch_note(
            &self.detector,
            user_location,
            picks.iter().map(|p| p.location.as_str()),
        );

        let note = compose_notes([backend_note, distance.as_deref(), country.as_deref()]);

        GuardrailOutcome {
            picks,
            dropped,
            note,
        }
    }
}

/// [`GuardrailFilter::apply`] with the built-in country lexicon.
#[must_use]
pub fn filter_and_annotate(
    user_location: &str,
    mode: Mode,
    picks: Vec<Pick>,
    backend_note: Option<&str>,
) -> GuardrailOutcome {
    GuardrailFilter::<CountryLexicon>::default().apply(user_location, mode, picks, backend_note)
}

/// Joins the present, non-empty notes with [`NOTE_SEPARATOR`].
#[must_use]
pub fn compose_notes<'a, I>(notes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    notes
        .into_iter()
        .flatten()
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(NOTE_SEPARATOR)
}

#[cfg(test)]
#[path = "../guardrail_test.rs"]
mod tests;
