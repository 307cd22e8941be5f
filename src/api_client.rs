use crate::models::User;
use std::time::Duration;
use thiserror::Error;

/// Default directory source. Override via config or the USER_API_URL
/// environment variable.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Errors from the directory source.
///
/// The loader makes a single attempt per call: no retry, no backoff.
/// Callers own the loading/error UI state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint could not be reached or the transfer failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("API returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The body did not decode into the expected record shape.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct DirectoryClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl DirectoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Build a client with a request timeout. Without one a dead
    /// endpoint leaves the loading state up indefinitely.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full directory in one response. Order is whatever the
    /// source returns; no deduplication is applied.
    pub fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/users", self.base_url);
        tracing::info!(target: "api", "GET {}", url);

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }

        // Decode from the raw body rather than response.json() so a
        // shape mismatch surfaces as Parse, not Network.
        let body = response.text()?;
        let users: Vec<User> = serde_json::from_str(&body)?;
        tracing::info!(target: "api", "Loaded {} users", users.len());
        Ok(users)
    }

    /// Fetch a single record for the detail view. Same contract as
    /// `fetch_users`: one attempt, typed decode, fail fast.
    pub fn fetch_user(&self, id: u64) -> Result<User, ApiError> {
        let url = format!("{}/users/{}", self.base_url, id);
        tracing::info!(target: "api", "GET {}", url);

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }

        let body = response.text()?;
        let user: User = serde_json::from_str(&body)?;
        Ok(user)
    }
}
