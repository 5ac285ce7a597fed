//! Client configuration
//!
//! Resolved once at construction and immutable afterwards; concurrent calls
//! read it without synchronization.

use openfirme_core::OpenFirmeError;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openfirme.ro";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Machine code for a missing credential at construction time.
pub const CODE_MISSING_API_KEY: &str = "MISSING_API_KEY";

/// Immutable configuration for an [`OpenFirmeClient`]
///
/// # Example
///
/// ```
/// use openfirme_client::ClientConfig;
///
/// let config = ClientConfig::new("of_live_abc123")
///     .with_sandbox(true)
///     .with_timeout_ms(5_000);
/// assert!(config.sandbox);
/// ```
///
/// [`OpenFirmeClient`]: crate::OpenFirmeClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Standard-tier or free-tier API key, sent on every request.
    pub api_key: String,
    /// Request server-side fixture data instead of live records.
    pub sandbox: bool,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            sandbox: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Reject configurations with an empty credential
    ///
    /// Checked before anything else at client construction.
    pub(crate) fn validate(&self) -> Result<(), OpenFirmeError> {
        if self.api_key.trim().is_empty() {
            return Err(OpenFirmeError::Validation {
                message: "An API key is required".to_string(),
                code: CODE_MISSING_API_KEY.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("key");
        assert!(!config.sandbox);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new("key")
            .with_sandbox(true)
            .with_base_url("http://localhost:9000")
            .with_timeout_ms(100);
        assert!(config.sandbox);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_ms, 100);
    }

    #[test]
    fn test_empty_key_fails_validation() {
        let err = ClientConfig::new("").validate().unwrap_err();
        assert_eq!(err.code(), CODE_MISSING_API_KEY);
    }

    #[test]
    fn test_whitespace_key_fails_validation() {
        assert!(ClientConfig::new("   ").validate().is_err());
    }

    #[test]
    fn test_non_empty_key_passes() {
        assert!(ClientConfig::new("of_live_abc").validate().is_ok());
    }
}
