//! The main search flow: validate the form, call the backend, run the
//! display guardrails, and reduce every outcome to something showable.
//!
//! [`run_search`] never fails. Transport and decoding failures become the
//! "could not reach the server" note; a backend `error` becomes that text.
//! There is no automatic retry.

use lrs_core::guardrail::{CountryDetector, CountryLexicon, GuardrailFilter};
use lrs_core::presentation::{debug_line, EMPTY_LOCATION_NOTE, SERVER_UNREACHABLE_NOTE};
use lrs_core::{Mode, Pick};

use crate::source::PickSource;

/// Raw form input as the user left it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub location: String,
    pub cuisine: String,
    pub mode: Mode,
}

/// Validated query sent to `GET /lrs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Trimmed, otherwise exactly what is in the location field.
    pub location: String,
    /// Trimmed craving; `None` when blank.
    pub cuisine: Option<String>,
    pub mode: Mode,
}

impl SearchRequest {
    pub fn new(location: impl Into<String>, cuisine: impl Into<String>, mode: Mode) -> Self {
        Self {
            location: location.into(),
            cuisine: cuisine.into(),
            mode,
        }
    }

    /// `None` when the trimmed location is empty.
    #[must_use]
    pub fn to_query(&self) -> Option<SearchQuery> {
        let location = self.location.trim();
        if location.is_empty() {
            return None;
        }
        let cuisine = self.cuisine.trim();
        Some(SearchQuery {
            location: location.to_string(),
            cuisine: (!cuisine.is_empty()).then(|| cuisine.to_string()),
            mode: self.mode,
        })
    }
}

/// Everything the results area shows after a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub mode: Mode,
    pub picks: Vec<Pick>,
    /// Combined advisory; empty when there is nothing to say.
    pub note: String,
    pub debug_line: Option<String>,
    /// Picks hidden for exceeding the mode's distance cap.
    pub dropped: usize,
}

impl SearchOutcome {
    fn with_note(mode: Mode, note: impl Into<String>) -> Self {
        Self {
            mode,
            note: note.into(),
            ..Self::default()
        }
    }

    /// The calm "no strong matches" card: a search ran, nothing to list, and
    /// no note explains why.
    #[must_use]
    pub fn show_empty_state(&self) -> bool {
        self.picks.is_empty() && self.note.is_empty()
    }
}

/// Runs a search with the built-in country lexicon.
pub async fn run_search<P>(source: &P, request: &SearchRequest) -> SearchOutcome
where
    P: PickSource,
{
    run_search_with(source, &GuardrailFilter::<CountryLexicon>::default(), request).await
}

/// Runs a search with a caller-supplied guardrail filter.
pub async fn run_search_with<P, D>(
    source: &P,
    filter: &GuardrailFilter<D>,
    request: &SearchRequest,
) -> SearchOutcome
where
    P: PickSource,
    D: CountryDetector,
{
    let Some(query) = request.to_query() else {
        tracing::info!("search skipped: empty location");
        return SearchOutcome::with_note(request.mode, EMPTY_LOCATION_NOTE);
    };

    let response = match source.fetch_picks(&query).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(location = %query.location, error = %e, "search request failed");
            return SearchOutcome::with_note(query.mode, SERVER_UNREACHABLE_NOTE);
        }
    };

    if let Some(error) = response.error {
        tracing::info!(location = %query.location, error = %error, "backend rejected search");
        return SearchOutcome::with_note(query.mode, error);
    }

    let guarded = filter.apply(
        &query.location,
        query.mode,
        response.picks,
        response.limitation_note.as_deref(),
    );

    let debug = response
        .debug
        .map(|d| debug_line(d.mode.as_deref(), guarded.picks.len()));

    SearchOutcome {
        mode: query.mode,
        picks: guarded.picks,
        note: guarded.note,
        debug_line: debug,
        dropped: guarded.dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_location_is_not_a_query() {
        let req = SearchRequest::new("   ", "tacos", Mode::Strict);
        assert!(req.to_query().is_none());
    }

    #[test]
    fn query_trims_fields_and_drops_blank_cuisine() {
        let req = SearchRequest::new("  Austin, TX ", "  ", Mode::Best);
        let q = req.to_query().unwrap();
        assert_eq!(q.location, "Austin, TX");
        assert_eq!(q.cuisine, None);
        assert_eq!(q.mode, Mode::Best);
    }

    #[test]
    fn query_keeps_cuisine() {
        let q = SearchRequest::new("Austin", " ramen ", Mode::Hype)
            .to_query()
            .unwrap();
        assert_eq!(q.cuisine.as_deref(), Some("ramen"));
    }

    #[test]
    fn empty_state_needs_no_picks_and_no_note() {
        assert!(SearchOutcome::default().show_empty_state());
        assert!(!SearchOutcome::with_note(Mode::Strict, "x").show_empty_state());
    }
}
