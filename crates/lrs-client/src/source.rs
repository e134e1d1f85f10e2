//! Seams between the client-side flows and the backend.
//!
//! [`LrsClient`] implements both traits; tests substitute scripted sources.

use std::future::Future;

use lrs_core::{LocationSuggestion, SearchResponse};

use crate::client::LrsClient;
use crate::error::LrsError;
use crate::search::SearchQuery;

/// Something that can answer a location autocomplete query.
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch_suggestions(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<LocationSuggestion>, LrsError>> + Send;
}

/// Something that can run a ranked restaurant search.
pub trait PickSource: Send + Sync {
    fn fetch_picks(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<SearchResponse, LrsError>> + Send;
}

impl SuggestionSource for LrsClient {
    async fn fetch_suggestions(&self, query: &str) -> Result<Vec<LocationSuggestion>, LrsError> {
        self.suggest(query).await
    }
}

impl PickSource for LrsClient {
    async fn fetch_picks(&self, query: &SearchQuery) -> Result<SearchResponse, LrsError> {
        self.search(query).await
    }
}
