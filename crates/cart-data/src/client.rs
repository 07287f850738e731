//! JSON fetch client with timeout and retry.

use crate::retry::FetchPolicy;
use crate::FetchError;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP client for the inventory API.
///
/// Requests are relative to a base URL. Failures matching the retry policy
/// are retried with backoff before the error is returned.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
    policy: FetchPolicy,
}

impl FetchClient {
    /// Create a client with the default policy.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_policy(base_url, FetchPolicy::default())
    }

    /// Create a client with an explicit policy.
    pub fn with_policy(base_url: impl Into<String>, policy: FetchPolicy) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(base_url));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(policy.timeout.connect)
            .timeout(policy.timeout.total)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            policy,
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Active policy.
    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// Resolve a path against the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and parse the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        let mut attempt = 0;

        loop {
            match self.get_once(&url).await {
                Ok(value) => return Ok(value),
                Err(err) if self.policy.retry.should_retry(&err, attempt) => {
                    let delay = self.policy.retry.backoff.delay_for_attempt(attempt);
                    warn!(%url, attempt, error = %err, ?delay, "retrying request");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status().as_u16();
        if status >= 400 {
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        debug!(%url, status, bytes = bytes.len(), "response received");
        Ok(serde_json::from_slice(&bytes)?)
    }
}
