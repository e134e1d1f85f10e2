//! HTTP client and client-side flows for the Local Restaurant Scout backend.
//!
//! [`LrsClient`] speaks to `GET /suggest` and `GET /lrs`.
//! [`SuggestionDebouncer`] drives location autocomplete and [`run_search`]
//! drives a full search through the display guardrails.

pub mod client;
pub mod debounce;
pub mod error;
pub mod search;
pub mod source;

pub use client::LrsClient;
pub use debounce::{DebounceSettings, SuggestionDebouncer, SuggestionState, MIN_QUERY_CHARS};
pub use error::LrsError;
pub use search::{run_search, run_search_with, SearchOutcome, SearchQuery, SearchRequest};
pub use source::{PickSource, SuggestionSource};
