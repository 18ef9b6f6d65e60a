//! HTTP clients for the two public photo-list endpoints.
//!
//! Each client issues a single unauthenticated GET against a
//! pre-configured base URL and decodes the JSON array the server returns.
//! There is no pagination, no caching and no retry; faults are surfaced
//! to the caller unchanged.

use std::time::Duration;

use crate::models::{MarsPhoto, PicsumPhoto};

const USER_AGENT: &str = "photo-roll/0.1.0";

/// Error type for photo feed operations
#[derive(Debug)]
pub enum FeedError {
    /// Transport fault: connect failure, timeout, broken stream
    Network(String),
    /// The server answered with a non-success status
    Server(String),
    /// The response body could not be decoded
    Json(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Network(msg) => write!(f, "Network error: {}", msg),
            FeedError::Server(msg) => write!(f, "Server error: {}", msg),
            FeedError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

/// Build the shared HTTP client used by both photo APIs
fn build_client() -> Result<reqwest::Client, FeedError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FeedError::Network(format!("Client build failed: {}", e)))
}

async fn fetch_list<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<T>, FeedError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FeedError::Network(format!("Request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(FeedError::Server(format!(
            "Server returned status: {}",
            response.status()
        )));
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| FeedError::Json(format!("Failed to parse response: {}", e)))
}

/// Client for the Mars rover photo catalog.
pub struct MarsApi {
    base_url: String,
    client: reqwest::Client,
}

impl MarsApi {
    /// Create a client against the given base URL (no trailing path).
    pub fn new(base_url: String) -> Result<Self, FeedError> {
        Ok(Self {
            base_url,
            client: build_client()?,
        })
    }

    /// Fetch the complete photo listing, in server-response order.
    pub async fn photos(&self) -> Result<Vec<MarsPhoto>, FeedError> {
        let url = format!("{}/photos", self.base_url.trim_end_matches('/'));
        log::debug!("Fetching Mars photo list from {}", url);
        fetch_list(&self.client, &url).await
    }
}

/// Client for the Picsum stock-photo service.
pub struct PicsumApi {
    base_url: String,
    client: reqwest::Client,
}

impl PicsumApi {
    /// Create a client against the given base URL (no trailing path).
    pub fn new(base_url: String) -> Result<Self, FeedError> {
        Ok(Self {
            base_url,
            client: build_client()?,
        })
    }

    /// Fetch the current picture listing, in server-response order.
    pub async fn list(&self) -> Result<Vec<PicsumPhoto>, FeedError> {
        let url = format!("{}/v2/list", self.base_url.trim_end_matches('/'));
        log::debug!("Fetching picsum photo list from {}", url);
        fetch_list(&self.client, &url).await
    }
}
