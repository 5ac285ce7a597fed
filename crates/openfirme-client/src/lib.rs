//! # OpenFirme Client
//!
//! HTTP client for the OpenFirme company-registry API.
//!
//! This crate provides:
//! - [`OpenFirmeClient`] with one method per remote operation
//! - [`ClientConfig`] for credential, sandbox mode, base URL and timeout
//! - A timeout-bounded transport that classifies every outcome into the
//!   [`OpenFirmeError`] taxonomy from `openfirme-core`
//!
//! Every call is a single bounded GET exchange: no retries, no caching, no
//! pagination traversal. Failures are distinguished by error variant, not by
//! message text.
//!
//! ## Example
//!
//! ```ignore
//! use openfirme_client::{ClientConfig, OpenFirmeClient, SearchCriteria};
//!
//! let client = OpenFirmeClient::new(ClientConfig::new("of_live_abc123"))?;
//!
//! let company = client.company("RO12345678").await?;
//! let results = client
//!     .search(&SearchCriteria::default().with_judet("CJ").with_tva(true))
//!     .await?;
//! ```

mod client;
mod config;
mod transport;

pub use client::OpenFirmeClient;
pub use config::{ClientConfig, CODE_MISSING_API_KEY, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use transport::{API_KEY_HEADER, CLIENT_HEADER, CLIENT_IDENT, SANDBOX_HEADER};

// Re-exports so callers need only one crate in scope.
pub use openfirme_core::{
    BalanceSheet, Company, CompanySummary, DebtEntry, FreeCompany, FreeUsage, MofPublication,
    MofRecord, OpenFirmeError, SearchCriteria, SearchResult, TaxRecord,
};
