//! Stub implementations for testing.
//!
//! These implementations simulate the transport and clock ports without
//! real network calls or wall-clock reads.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AdapterError, AdapterResult};
use crate::ports::{Clock, HttpTransport};
use crate::signer::PreparedRequest;

// =============================================================================
// Stub Transport
// =============================================================================

/// Stub transport for testing.
///
/// Serves canned responses keyed by URL (query string ignored on
/// fallback) and records every executed request for assertions.
pub struct StubTransport {
    /// Canned responses by URL
    responses: RwLock<HashMap<String, Value>>,
    /// Every request executed, in order
    requests: RwLock<Vec<PreparedRequest>>,
    /// Whether to simulate a failure on the next request
    fail_next: RwLock<bool>,
}

impl StubTransport {
    /// Create an empty stub transport.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            requests: RwLock::new(Vec::new()),
            fail_next: RwLock::new(false),
        }
    }

    /// Register a canned response for a URL.
    pub fn set_response(&self, url: &str, response: Value) {
        let mut responses = self.responses.write().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Configure the next request to fail.
    pub fn set_fail_next(&self, fail: bool) {
        let mut fail_next = self.fail_next.write().unwrap();
        *fail_next = fail;
    }

    /// Get all executed requests so far.
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.read().unwrap().clone()
    }

    /// Check if we should fail the next operation.
    fn should_fail(&self) -> bool {
        let mut fail_next = self.fail_next.write().unwrap();
        let fail = *fail_next;
        *fail_next = false; // Reset after check
        fail
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn execute(&self, request: PreparedRequest) -> AdapterResult<Value> {
        if self.should_fail() {
            return Err(AdapterError::Transport(
                "Simulated transport failure".to_string(),
            ));
        }

        let url = request.url.clone();
        self.requests.write().unwrap().push(request);

        let responses = self.responses.read().unwrap();
        if let Some(response) = responses.get(&url) {
            return Ok(response.clone());
        }
        // Fall back to the URL without its query string
        if let Some((path, _query)) = url.split_once('?') {
            if let Some(response) = responses.get(path) {
                return Ok(response.clone());
            }
        }

        Err(AdapterError::Transport(format!("No stub response for {}", url)))
    }
}

// =============================================================================
// Fixed Clock
// =============================================================================

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::HttpMethod;
    use serde_json::json;

    fn get(url: &str) -> PreparedRequest {
        PreparedRequest {
            url: url.to_string(),
            method: HttpMethod::Get,
            body: None,
            headers: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_stub_serves_canned_response() {
        let stub = StubTransport::new();
        stub.set_response("https://example.com/assets/", json!([{"id": 1}]));

        let value = stub.execute(get("https://example.com/assets/")).await.unwrap();
        assert_eq!(value, json!([{"id": 1}]));
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_stub_ignores_query_on_fallback() {
        let stub = StubTransport::new();
        stub.set_response("https://example.com/depth/1:2", json!({"bids": [], "asks": []}));

        let value = stub
            .execute(get("https://example.com/depth/1:2?limit=5"))
            .await
            .unwrap();
        assert_eq!(value, json!({"bids": [], "asks": []}));
    }

    #[tokio::test]
    async fn test_stub_simulated_failure_resets() {
        let stub = StubTransport::new();
        stub.set_response("https://example.com/assets/", json!([]));
        stub.set_fail_next(true);

        let result = stub.execute(get("https://example.com/assets/")).await;
        assert!(matches!(result, Err(AdapterError::Transport(_))));

        // Next call succeeds
        let result = stub.execute(get("https://example.com/assets/")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_stub_unknown_url_errors() {
        let stub = StubTransport::new();
        let result = stub.execute(get("https://example.com/nope")).await;
        assert!(matches!(result, Err(AdapterError::Transport(_))));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(1_700_000_000_000);
        assert_eq!(clock.now_millis(), 1_700_000_000_000);
    }
}
