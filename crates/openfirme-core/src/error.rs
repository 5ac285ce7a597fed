//! Error taxonomy for OpenFirme API calls
//!
//! Every failure a call can produce is one variant of [`OpenFirmeError`].
//! Callers are expected to match on the variant, not parse message text.

use thiserror::Error;

use crate::envelope::ErrorEnvelope;

/// Machine code attached to every `Network` failure.
pub const CODE_NETWORK_ERROR: &str = "NETWORK_ERROR";

/// Machine code attached to every `Timeout` failure.
pub const CODE_TIMEOUT: &str = "TIMEOUT";

/// Fallback machine code when the server omits one.
pub const CODE_UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Fallback message when the server supplies neither `message` nor `error`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Errors that can occur during OpenFirme API operations
///
/// Exactly one terminal outcome per call: either the decoded payload or one
/// of these variants. Each variant carries the human-readable message and the
/// machine code reported by the server (or client-side constants for failures
/// raised before/below the HTTP layer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpenFirmeError {
    #[error("Authentication failed: {message}")]
    Authentication { message: String, code: String },

    #[error("Not found: {message}")]
    NotFound { message: String, code: String },

    #[error("Rate limit exceeded: {message} (retry after {retry_after}s, usage {current_usage}/{limit})")]
    RateLimit {
        message: String,
        code: String,
        /// Seconds to wait before retrying, as reported by the server.
        retry_after: u64,
        current_usage: u64,
        limit: u64,
    },

    #[error("Insufficient credits: {message} (available {available}, required {required})")]
    InsufficientCredits {
        message: String,
        code: String,
        available: u64,
        required: u64,
    },

    #[error("Validation error: {message}")]
    Validation { message: String, code: String },

    #[error("API error (HTTP {status}): {message}")]
    Api {
        message: String,
        code: String,
        /// The original HTTP status code.
        status: u16,
    },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl OpenFirmeError {
    /// The machine code for this failure.
    pub fn code(&self) -> &str {
        match self {
            Self::Authentication { code, .. }
            | Self::NotFound { code, .. }
            | Self::RateLimit { code, .. }
            | Self::InsufficientCredits { code, .. }
            | Self::Validation { code, .. }
            | Self::Api { code, .. } => code,
            Self::Network { .. } => CODE_NETWORK_ERROR,
            Self::Timeout { .. } => CODE_TIMEOUT,
        }
    }
}

/// Error codes a 403 response may carry when the account balance, rather
/// than the credential, is the problem.
const CREDIT_CODES: [&str; 2] = ["CREDITS_EXHAUSTED", "MOF_INSUFFICIENT_CREDITS"];

/// Classify a non-2xx HTTP response into exactly one [`OpenFirmeError`]
///
/// The HTTP status is the sole dispatch key, except for 403 which
/// sub-dispatches on the machine code to separate credit exhaustion from
/// credential problems. Numeric extras are read leniently: absent or
/// wrong-typed server values coerce to their documented defaults.
pub fn classify_status(status: u16, envelope: &ErrorEnvelope) -> OpenFirmeError {
    let message = envelope.display_message();
    let code = envelope.machine_code();

    match status {
        401 => OpenFirmeError::Authentication { message, code },
        403 if CREDIT_CODES.contains(&code.as_str()) => OpenFirmeError::InsufficientCredits {
            message,
            code,
            available: envelope.available_credits_or(0),
            required: envelope.required_credits_or(1),
        },
        403 => OpenFirmeError::Authentication { message, code },
        404 => OpenFirmeError::NotFound { message, code },
        429 => OpenFirmeError::RateLimit {
            message,
            code,
            retry_after: envelope.retry_after_or(1),
            current_usage: envelope.current_usage_or(0),
            limit: envelope.limit_or(0),
        },
        400 => OpenFirmeError::Validation { message, code },
        _ => OpenFirmeError::Api {
            message,
            code,
            status,
        },
    }
}
