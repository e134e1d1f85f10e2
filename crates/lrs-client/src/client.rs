//! HTTP client for the Local Restaurant Scout backend.
//!
//! Wraps `reqwest` with base-URL handling and typed decoding of the two
//! endpoints the app uses: `GET /suggest` (location autocomplete) and
//! `GET /lrs` (ranked picks).

use std::time::Duration;

use lrs_core::{normalize_suggestions, AppConfig, LocationSuggestion, SearchResponse};
use reqwest::{Client, Url};

use crate::error::LrsError;
use crate::search::SearchQuery;

/// Client for the Local Restaurant Scout backend.
///
/// Use [`LrsClient::from_config`] in the binary or [`LrsClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct LrsClient {
    client: Client,
    base_url: Url,
}

impl LrsClient {
    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`LrsClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, LrsError> {
        Self::with_base_url(
            &config.api_base,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LrsError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`LrsError::InvalidBaseUrl`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LrsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joining "suggest" appends a segment
        // instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| LrsError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches raw location suggestions for `query`.
    ///
    /// Entries are trimmed and those with an empty label dropped; the
    /// city-like filter is left to the caller. A body without a
    /// `suggestions` array yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`LrsError::Http`] on network failure or non-2xx HTTP status.
    /// - [`LrsError::Deserialize`] if the body is not JSON.
    pub async fn suggest(&self, query: &str) -> Result<Vec<LocationSuggestion>, LrsError> {
        let url = self.build_url("suggest", &[("q", query)])?;
        let body = self.request_json(&url).await?;
        let suggestions = normalize_suggestions(&body);
        tracing::debug!(query, count = suggestions.len(), "fetched location suggestions");
        Ok(suggestions)
    }

    /// Runs a ranked search.
    ///
    /// `location` is sent exactly as given; `cuisine` is omitted when absent.
    ///
    /// # Errors
    ///
    /// - [`LrsError::Http`] on network failure or non-2xx HTTP status.
    /// - [`LrsError::Deserialize`] if the body is not JSON or does not have
    ///   the search response shape.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, LrsError> {
        let mut params = vec![("location", query.location.as_str())];
        if let Some(cuisine) = query.cuisine.as_deref() {
            params.push(("cuisine", cuisine));
        }
        params.push(("mode", query.mode.as_str()));

        let url = self.build_url("lrs", &params)?;
        let body = self.request_json(&url).await?;
        let response = SearchResponse::from_json(body).map_err(|e| LrsError::Deserialize {
            context: format!("lrs(location={}, mode={})", query.location, query.mode),
            source: e,
        })?;

        tracing::info!(
            location = %query.location,
            mode = %query.mode,
            picks = response.picks.len(),
            backend_error = response.error.is_some(),
            "search completed"
        );
        Ok(response)
    }

    /// Builds the endpoint URL with properly percent-encoded query parameters.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, LrsError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| LrsError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request and parses the response body as JSON.
    ///
    /// A non-2xx response whose JSON body carries a backend `error` is
    /// returned as data, so the caller can show that text.
    ///
    /// # Errors
    ///
    /// Returns [`LrsError::Http`] on network failure, or on a non-2xx status
    /// whose body is not JSON or has no `error`.
    /// Returns [`LrsError::Deserialize`] if a 2xx body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, LrsError> {
        let response = self.client.get(url.clone()).send().await?;
        let status_error = response.error_for_status_ref().err();
        let body = response.text().await?;

        if let Some(err) = status_error {
            return match serde_json::from_str::<serde_json::Value>(&body) {
                Ok(value) if carries_backend_error(&value) => {
                    tracing::debug!(
                        path = url.path(),
                        status = ?err.status(),
                        "non-2xx response carries a backend error"
                    );
                    Ok(value)
                }
                _ => Err(err.into()),
            };
        }

        serde_json::from_str(&body).map_err(|e| LrsError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

fn carries_backend_error(body: &serde_json::Value) -> bool {
    match body.get("error") {
        Some(serde_json::Value::String(s)) => !s.trim().is_empty(),
        Some(serde_json::Value::Number(_)) => true,
        _ => false,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
