//! HTTP implementation of the user source

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::source::{RawUser, UserSource};
use crate::domain::DomainError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Random-user endpoint client over reqwest.
///
/// `fetch_one` issues a plain GET against the base URL; `fetch_many` adds a
/// `size` query parameter. Transport failures and non-2xx responses both
/// surface as [`DomainError::SourceUnavailable`].
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::source_unavailable(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::source_unavailable(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        response.json().await.map_err(|e| {
            DomainError::source_unavailable(format!("Failed to parse response: {e}"))
        })
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_one(&self) -> Result<RawUser, DomainError> {
        debug!(url = %self.base_url, "Fetching one raw user");
        self.get_json(self.client.get(&self.base_url)).await
    }

    async fn fetch_many(&self, count: usize) -> Result<Vec<RawUser>, DomainError> {
        debug!(url = %self.base_url, count, "Fetching raw user batch");
        self.get_json(self.client.get(&self.base_url).query(&[("size", count)]))
            .await
    }
}
