//! Reqwest-backed HTTP transport.
//!
//! Thin port implementation: sends the prepared request, enforces a
//! timeout, checks the HTTP status, and decodes the JSON body.
//! Retries, rate limiting, and cancellation policy live above or below
//! this layer, never in the adapter core.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use crate::error::{AdapterError, AdapterResult};
use crate::ports::HttpTransport;
use crate::signer::{HttpMethod, PreparedRequest};

/// Request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP transport backed by reqwest.
pub struct RestTransport {
    client: Client,
}

impl RestTransport {
    /// Create a new transport with a default client.
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for RestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for RestTransport {
    async fn execute(&self, request: PreparedRequest) -> AdapterResult<serde_json::Value> {
        debug!(method = %request.method, url = %request.url, "executing request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS), builder.send())
            .await
            .map_err(|_| AdapterError::Transport("Request timed out".to_string()))?
            .map_err(|e| AdapterError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdapterError::Parse(e.to_string()))?;

        if !status.is_success() {
            return Err(AdapterError::Transport(format!("HTTP {}: {}", status, body)));
        }

        serde_json::from_str(&body).map_err(|e| AdapterError::Parse(e.to_string()))
    }
}
