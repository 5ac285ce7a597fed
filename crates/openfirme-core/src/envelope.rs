//! Response envelopes
//!
//! Every OpenFirme response body is a JSON envelope: a `success` flag plus
//! either the operation payload (`data`) or error details. The envelope is
//! decoded here and discarded before results reach the caller.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CODE_UNKNOWN_ERROR, UNKNOWN_ERROR_MESSAGE};

/// Success envelope wrapping an operation-specific payload
///
/// `data` is required: a 2xx body without a payload fails to decode and
/// surfaces as a transport-level failure rather than a classified one.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,

    /// Echo of the sandbox-mode header, when the server sets it.
    #[serde(default)]
    pub sandbox: Option<bool>,
}

/// Error envelope returned on any non-2xx status
///
/// Every field is optional. The numeric extras are kept as raw JSON values
/// so a wrong-typed value coerces to its default instead of failing the
/// decode; the remote service's error-payload guarantees are loose.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub sandbox: Option<bool>,

    // 403 credit details
    #[serde(default)]
    pub available_credits: Option<Value>,
    #[serde(default)]
    pub required_credits: Option<Value>,

    // 429 rate-limit details
    #[serde(default)]
    pub retry_after: Option<Value>,
    #[serde(default)]
    pub current_usage: Option<Value>,
    #[serde(default)]
    pub limit: Option<Value>,
}

impl ErrorEnvelope {
    /// Human-readable message: `message`, else `error`, else a fixed literal.
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
    }

    /// Machine code, defaulting when the server omits one.
    pub fn machine_code(&self) -> String {
        self.code
            .clone()
            .unwrap_or_else(|| CODE_UNKNOWN_ERROR.to_string())
    }

    pub fn available_credits_or(&self, default: u64) -> u64 {
        lenient_u64(&self.available_credits, default)
    }

    pub fn required_credits_or(&self, default: u64) -> u64 {
        lenient_u64(&self.required_credits, default)
    }

    pub fn retry_after_or(&self, default: u64) -> u64 {
        lenient_u64(&self.retry_after, default)
    }

    pub fn current_usage_or(&self, default: u64) -> u64 {
        lenient_u64(&self.current_usage, default)
    }

    pub fn limit_or(&self, default: u64) -> u64 {
        lenient_u64(&self.limit, default)
    }
}

/// Absent, null and wrong-typed values all read as the default.
fn lenient_u64(value: &Option<Value>, default: u64) -> u64 {
    value.as_ref().and_then(Value::as_u64).unwrap_or(default)
}
