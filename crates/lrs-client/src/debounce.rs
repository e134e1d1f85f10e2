//! Debounced location autocomplete.
//!
//! Every qualifying [`SuggestionDebouncer::update`] records the query as the
//! last scheduled one and spawns an attempt that sleeps for the debounce
//! window. An attempt publishes only if, when it finishes, its query is still
//! the last scheduled one and nothing has withdrawn interest in it (a newer
//! update, a selection, or dropping the debouncer). Transport requests are
//! never aborted; their late results are discarded instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use lrs_core::suggest::DEFAULT_SUGGESTION_LIMIT;
use lrs_core::{filter_city_like, LocationSuggestion};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::source::SuggestionSource;

/// Minimum trimmed query length, in characters, before suggestions are
/// fetched.
pub const MIN_QUERY_CHARS: usize = 3;

/// Timing of the autocomplete loop. The trigger length and result cap are
/// fixed; only the debounce window can be changed, and only in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceSettings {
    pub delay: Duration,
}

impl Default for DebounceSettings {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(250),
        }
    }
}

/// What the dropdown currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    pub suggestions: Vec<LocationSuggestion>,
    /// An attempt is waiting out the debounce window or fetching.
    pub loading: bool,
}

/// Drives location suggestions for one location field.
///
/// Must be used from within a Tokio runtime: qualifying updates spawn a task.
pub struct SuggestionDebouncer<S> {
    source: Arc<S>,
    settings: DebounceSettings,
    last_scheduled: Arc<Mutex<String>>,
    interest: Arc<AtomicBool>,
    state: Arc<watch::Sender<SuggestionState>>,
    focused: bool,
}

impl<S: SuggestionSource> SuggestionDebouncer<S> {
    pub fn new(source: Arc<S>, settings: DebounceSettings) -> Self {
        let (state, _) = watch::channel(SuggestionState::default());
        Self {
            source,
            settings,
            last_scheduled: Arc::new(Mutex::new(String::new())),
            interest: Arc::new(AtomicBool::new(false)),
            state: Arc::new(state),
            focused: false,
        }
    }

    /// Receiver that observes every published [`SuggestionState`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SuggestionState {
        self.state.borrow().clone()
    }

    /// Reacts to a change of the location text or its focus.
    ///
    /// Withdraws interest in any pending attempt. If the field is unfocused
    /// or the trimmed query is shorter than [`MIN_QUERY_CHARS`], clears the dropdown
    /// and returns `None`. Otherwise schedules a new attempt and returns its
    /// handle; awaiting it is optional.
    pub fn update(&mut self, query: &str, focused: bool) -> Option<JoinHandle<()>> {
        self.withdraw();
        self.focused = focused;

        let trimmed = query.trim();
        if !focused || trimmed.chars().count() < MIN_QUERY_CHARS {
            self.state.send_modify(|s| {
                s.suggestions.clear();
                s.loading = false;
            });
            return None;
        }

        let key = trimmed.to_lowercase();
        lock(&self.last_scheduled).clone_from(&key);
        self.state.send_modify(|s| s.loading = true);

        let interest = Arc::new(AtomicBool::new(true));
        self.interest = Arc::clone(&interest);

        let attempt = Attempt {
            source: Arc::clone(&self.source),
            last_scheduled: Arc::clone(&self.last_scheduled),
            interest,
            state: Arc::clone(&self.state),
            delay: self.settings.delay,
        };
        Some(tokio::spawn(attempt.run(trimmed.to_string(), key)))
    }

    /// Picks a suggestion: returns its label verbatim for the location field
    /// and closes the dropdown.
    pub fn select(&mut self, suggestion: &LocationSuggestion) -> String {
        self.hide();
        suggestion.label.clone()
    }

    /// Closes the dropdown without choosing anything.
    pub fn hide(&mut self) {
        self.withdraw();
        self.focused = false;
        self.state.send_modify(|s| {
            s.suggestions.clear();
            s.loading = false;
        });
    }

    /// Whether the dropdown should be visible for the current field text.
    #[must_use]
    pub fn should_show_dropdown(&self, query: &str) -> bool {
        self.focused
            && query.trim().chars().count() >= MIN_QUERY_CHARS
            && !self.state.borrow().suggestions.is_empty()
    }

    fn withdraw(&self) {
        self.interest.store(false, Ordering::SeqCst);
    }
}

impl<S> Drop for SuggestionDebouncer<S> {
    fn drop(&mut self) {
        self.interest.store(false, Ordering::SeqCst);
    }
}

struct Attempt<S> {
    source: Arc<S>,
    last_scheduled: Arc<Mutex<String>>,
    interest: Arc<AtomicBool>,
    state: Arc<watch::Sender<SuggestionState>>,
    delay: Duration,
}

impl<S: SuggestionSource> Attempt<S> {
    async fn run(self, query: String, key: String) {
        tokio::time::sleep(self.delay).await;

        let superseded = *lock(&self.last_scheduled) != key;
        if superseded {
            tracing::trace!(query = %query, "query changed during debounce, abandoning");
            if self.interested() {
                self.state.send_modify(|s| s.loading = false);
            }
            return;
        }

        let suggestions = match self.source.fetch_suggestions(&query).await {
            Ok(list) => filter_city_like(list, DEFAULT_SUGGESTION_LIMIT),
            Err(e) => {
                tracing::debug!(query = %query, error = %e, "suggestion fetch failed");
                Vec::new()
            }
        };

        // Hold the lock while publishing so an update cannot slip in between
        // the staleness check and the send.
        let current = lock(&self.last_scheduled);
        if !self.interested() || *current != key {
            tracing::trace!(query = %query, "discarding stale suggestions");
            return;
        }
        self.state.send_modify(|s| {
            s.suggestions = suggestions;
            s.loading = false;
        });
        drop(current);
    }

    fn interested(&self) -> bool {
        self.interest.load(Ordering::SeqCst)
    }
}

fn lock(m: &Mutex<String>) -> MutexGuard<'_, String> {
    m.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;
