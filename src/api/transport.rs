use crate::errors::{FetchError, FetchResult};
use std::future::Future;
use tracing::debug;

/// Fetches the body of a URL as text.
///
/// The client is generic over this so it can be driven by canned payloads in
/// tests and offline runs.
pub trait Transport: Send + Sync {
    fn get_text(&self, url: &str) -> impl Future<Output = FetchResult<String>> + Send;
}

/// reqwest-backed transport used by the binaries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent.to_string())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(format!("reach {}: {}", url, e)))?;

        let response = response
            .error_for_status()
            .map_err(|e| FetchError::new(format!("load {}: {}", url, e)))?;

        response
            .text()
            .await
            .map_err(|e| FetchError::new(format!("read {}: {}", url, e)))
    }
}
