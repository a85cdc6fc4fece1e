//! Request Signer
//!
//! Builds ready-to-send requests for venue endpoints: substitutes path
//! placeholders, appends leftover GET query parameters, and sets the
//! authentication header for private endpoints.
//!
//! # Authentication
//!
//! This venue uses HTTP Basic auth with a static credential string:
//! `base64(uid + "/" + api_key + ":" + private_key)`. There is no HMAC,
//! nonce, or timestamp signing.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::HashSet;
use std::fmt;

use coinflex_domain::ApiCredentials;

use crate::error::{AdapterError, AdapterResult};

// =============================================================================
// Request Types
// =============================================================================

/// HTTP method of a prepared request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request
    Get,
    /// POST request
    Post,
    /// PUT request
    Put,
    /// DELETE request
    Delete,
}

impl HttpMethod {
    /// Wire representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully-built request, ready for the transport to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// Absolute URL, query string included
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request body, passed through unmodified for non-GET requests
    pub body: Option<String>,
    /// Request headers
    pub headers: Vec<(String, String)>,
}

// =============================================================================
// Request Signer
// =============================================================================

/// Builds authenticated requests from stored credentials.
///
/// One implementation serves both public-only and private-capable
/// configurations: the private capability is simply the presence of
/// complete credentials.
pub struct RequestSigner {
    base_url: String,
    credentials: Option<ApiCredentials>,
}

impl RequestSigner {
    /// Create a signer for the given API base URL.
    pub fn new(base_url: impl Into<String>, credentials: Option<ApiCredentials>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Whether complete credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials
            .as_ref()
            .map(ApiCredentials::is_complete)
            .unwrap_or(false)
    }

    /// Build a request for an endpoint path.
    ///
    /// `{placeholder}` segments in `path` are substituted from `params`;
    /// the remaining params are appended as a query string for GET
    /// requests (no `?` suffix when nothing is left). A `body` is passed
    /// through unmodified.
    ///
    /// # Errors
    ///
    /// `AdapterError::MissingCredentials` when `private` is set and any
    /// of uid/api key/private key is absent - raised before any network
    /// call is made.
    pub fn sign(
        &self,
        path: &str,
        method: HttpMethod,
        params: &[(&str, String)],
        body: Option<String>,
        private: bool,
    ) -> AdapterResult<PreparedRequest> {
        let mut request_path = path.to_string();
        let mut consumed: HashSet<&str> = HashSet::new();

        for (key, value) in params {
            let placeholder = format!("{{{}}}", key);
            if request_path.contains(&placeholder) {
                request_path = request_path.replace(&placeholder, value);
                consumed.insert(key);
            }
        }

        let mut url = format!("{}/{}", self.base_url, request_path);

        if method == HttpMethod::Get {
            let query: Vec<String> = params
                .iter()
                .filter(|(key, _)| !consumed.contains(key))
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query.join("&"));
            }
        }

        let mut headers = Vec::new();
        if private {
            let credentials = self
                .credentials
                .as_ref()
                .filter(|creds| creds.is_complete())
                .ok_or_else(|| {
                    AdapterError::MissingCredentials(
                        "uid, api key and private key are required for private endpoints"
                            .to_string(),
                    )
                })?;

            let sid = format!(
                "{}/{}:{}",
                credentials.uid,
                credentials.api_key,
                credentials.private_key.as_str()
            );
            headers.push(("Authorization".to_string(), format!("Basic {}", STANDARD.encode(sid))));
        }

        Ok(PreparedRequest { url, method, body, headers })
    }
}

// =============================================================================
// Tests
// =============================================================================
