//! Exchange Credentials
//!
//! Static API credentials for private endpoints. This venue
//! authenticates with an encoded credential string per request; there
//! is no HMAC secret or nonce.
//!
//! The private key should:
//! - Never be logged
//! - Never be serialized to disk
//! - Be zeroized when dropped

use std::fmt;
use zeroize::Zeroize;

use crate::symbol::DomainError;

/// Decrypted API credentials (in-memory only, never persisted).
///
/// All three fields are required for private calls.
pub struct ApiCredentials {
    /// Numeric user id assigned by the venue
    pub uid: String,
    /// API key (public identifier)
    pub api_key: String,
    /// Private key (secret)
    pub private_key: zeroize::Zeroizing<String>,
}

impl ApiCredentials {
    /// Create new API credentials.
    pub fn new(
        uid: impl Into<String>,
        api_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            api_key: api_key.into(),
            private_key: zeroize::Zeroizing::new(private_key.into()),
        }
    }

    /// Check that all required fields are present.
    pub fn is_complete(&self) -> bool {
        !self.uid.is_empty() && !self.api_key.is_empty() && !self.private_key.is_empty()
    }

    /// Validate the credentials, naming the first missing field.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidCredentials` if any field is empty
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.uid.is_empty() {
            return Err(DomainError::InvalidCredentials("uid is required".to_string()));
        }
        if self.api_key.is_empty() {
            return Err(DomainError::InvalidCredentials("api key is required".to_string()));
        }
        if self.private_key.is_empty() {
            return Err(DomainError::InvalidCredentials(
                "private key is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("uid", &self.uid)
            .field("api_key", &self.api_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl Zeroize for ApiCredentials {
    fn zeroize(&mut self) {
        self.uid.zeroize();
        self.api_key.zeroize();
        self.private_key.zeroize();
    }
}

impl Drop for ApiCredentials {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_complete() {
        let creds = ApiCredentials::new("12345", "key", "secret");
        assert!(creds.is_complete());
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_credentials_missing_field() {
        let creds = ApiCredentials::new("12345", "", "secret");
        assert!(!creds.is_complete());
        assert!(matches!(
            creds.validate(),
            Err(DomainError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_credentials_debug_redacts_private_key() {
        let creds = ApiCredentials::new("12345", "key", "secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("12345"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_credentials_zeroize() {
        let mut creds = ApiCredentials::new("12345", "key", "secret");
        creds.zeroize();
        assert!(creds.uid.is_empty() || creds.uid.contains('\0'));
    }
}
