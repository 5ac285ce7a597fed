//! Transport core
//!
//! The single chokepoint every API call passes through: header construction,
//! timeout-bounded dispatch, envelope decoding and status classification.
//! Catalog methods in [`client`](crate::client) never touch HTTP directly.

use std::time::Duration;

use openfirme_core::{classify_status, ApiEnvelope, ErrorEnvelope, OpenFirmeError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;

/// Authentication header carrying the configured credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Fixed client-identification header.
pub const CLIENT_HEADER: &str = "x-client";

/// Sandbox-mode header, standard-tier only.
pub const SANDBOX_HEADER: &str = "x-sandbox";

/// Value of the client-identification header.
pub const CLIENT_IDENT: &str = concat!("openfirme-rust/", env!("CARGO_PKG_VERSION"));

/// Which key family an endpoint belongs to
///
/// The free-tier endpoints have no sandbox concept, so the sandbox header is
/// never attached to them even when the client runs in sandbox mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tier {
    Standard,
    Free,
}

/// Executes GET requests and interprets their outcome
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    /// Base URL with any trailing slash removed.
    base_url: String,
    timeout: Duration,
    sandbox: bool,
    /// Headers attached to every request regardless of tier.
    base_headers: HeaderMap,
}

impl Transport {
    pub(crate) fn new(
        http: reqwest::Client,
        config: &ClientConfig,
    ) -> Result<Self, OpenFirmeError> {
        let auth_value =
            HeaderValue::from_str(&config.api_key).map_err(|_| OpenFirmeError::Validation {
                message: "API key contains characters that cannot be sent in a header".to_string(),
                code: "INVALID_API_KEY".to_string(),
            })?;

        let mut base_headers = HeaderMap::new();
        base_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        base_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        base_headers.insert(CLIENT_HEADER, HeaderValue::from_static(CLIENT_IDENT));
        base_headers.insert(API_KEY_HEADER, auth_value);

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(config.timeout_ms),
            sandbox: config.sandbox,
            base_headers,
        })
    }

    /// Issue a GET request and produce exactly one terminal outcome
    ///
    /// 2xx bodies decode as a success envelope whose payload is returned
    /// bare; non-2xx bodies decode as an error envelope and classify into
    /// one typed failure. A body that fails to decode surfaces as the
    /// decode step's transport error, not a classified one.
    pub(crate) async fn get<T>(&self, path: &str, tier: Tier) -> Result<T, OpenFirmeError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?tier, sandbox = self.sandbox, "dispatching request");

        let response = self
            .http
            .get(&url)
            .headers(self.headers_for(tier))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            let envelope: ApiEnvelope<T> =
                response.json().await.map_err(|e| self.transport_error(e))?;
            Ok(envelope.data)
        } else {
            let envelope: ErrorEnvelope =
                response.json().await.map_err(|e| self.transport_error(e))?;
            let err = classify_status(status.as_u16(), &envelope);
            warn!(status = status.as_u16(), code = err.code(), %url, "request failed");
            Err(err)
        }
    }

    fn headers_for(&self, tier: Tier) -> HeaderMap {
        let mut headers = self.base_headers.clone();
        if self.sandbox && tier == Tier::Standard {
            headers.insert(SANDBOX_HEADER, HeaderValue::from_static("true"));
        }
        headers
    }

    /// Map a reqwest failure onto the taxonomy
    ///
    /// The per-request deadline aborts the in-flight call, so an elapsed
    /// timer is the only source of `is_timeout`. Everything else (DNS,
    /// connection reset, TLS, body decode) is a Network failure carrying the
    /// underlying message.
    fn transport_error(&self, err: reqwest::Error) -> OpenFirmeError {
        if err.is_timeout() {
            OpenFirmeError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            OpenFirmeError::Network {
                message: err.to_string(),
            }
        }
    }
}
