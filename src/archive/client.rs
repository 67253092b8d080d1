// SPDX-License-Identifier: MPL-2.0
//! Search client for the image archive endpoint.

use super::model::{parse_search_response, ImageResult};
use crate::config::{SearchConfig, SEARCH_MEDIA_TYPE, SEARCH_PAGE_SIZE};
use crate::error::{FailureCause, SearchError};
use reqwest::Url;
use std::time::Duration;

/// User agent sent with every archive request.
pub const USER_AGENT: &str = concat!("DeepZoomer/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for one archive request.
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, FailureCause> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| FailureCause::Network(e.to_string()))
}

/// Issues searches against the archive and normalizes the answers.
///
/// Cloning is cheap; each clone issues independent requests. Nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct SearchClient {
    endpoint: String,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    /// Creates a client from the `[search]` config section.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.endpoint(), config.timeout())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the URL requested for `query`: the endpoint plus the
    /// url-encoded query, the image media filter and the fixed page size.
    pub fn request_url(&self, query: &str) -> Result<Url, FailureCause> {
        let page_size = SEARCH_PAGE_SIZE.to_string();
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("q", query),
                ("media_type", SEARCH_MEDIA_TYPE),
                ("page_size", page_size.as_str()),
            ],
        )
        .map_err(|e| FailureCause::InvalidUrl(format!("{}: {e}", self.endpoint)))
    }

    /// Runs one search. The caller is expected to pass a non-empty query.
    ///
    /// Results keep the order the archive returned them in. Transport
    /// errors, non-success statuses and unparseable bodies all surface as
    /// [`SearchError::RequestFailed`]; there is no retry.
    pub async fn search(&self, query: &str) -> Result<Vec<ImageResult>, SearchError> {
        tracing::debug!(query, endpoint = %self.endpoint, "searching image archive");

        match self.fetch(query).await {
            Ok(results) => {
                tracing::info!(query, count = results.len(), "search completed");
                Ok(results)
            }
            Err(cause) => {
                tracing::warn!(query, error = %cause, "search failed");
                Err(SearchError::RequestFailed(cause))
            }
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<ImageResult>, FailureCause> {
        let url = self.request_url(query)?;
        let client = http_client(self.timeout)?;

        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FailureCause::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_search_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SearchClient {
        SearchClient::new("https://images-api.nasa.gov/search", Duration::from_secs(5))
    }

    #[test]
    fn request_url_carries_fixed_filters() {
        let url = client().request_url("andromeda").expect("valid endpoint");
        assert_eq!(
            url.as_str(),
            "https://images-api.nasa.gov/search?q=andromeda&media_type=image&page_size=24"
        );
    }

    #[test]
    fn request_url_encodes_query() {
        let url = client().request_url("crab nebula & M1/#2").expect("valid endpoint");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("q".to_string(), "crab nebula & M1/#2".to_string()));
        assert!(!url.query().unwrap_or_default().contains(' '));
        assert!(url.query().unwrap_or_default().contains("%26"));
    }

    #[test]
    fn invalid_endpoint_is_reported() {
        let client = SearchClient::new("not a url", Duration::from_secs(5));
        assert!(matches!(
            client.request_url("moon"),
            Err(FailureCause::InvalidUrl(_))
        ));
    }

    #[test]
    fn from_config_uses_default_endpoint() {
        let client = SearchClient::from_config(&SearchConfig::default());
        assert_eq!(client.endpoint(), crate::config::DEFAULT_SEARCH_ENDPOINT);
    }
}
