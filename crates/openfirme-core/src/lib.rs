//! # OpenFirme Core
//!
//! Core types for the OpenFirme company-registry API client.
//!
//! This crate provides:
//! - The [`OpenFirmeError`] taxonomy and HTTP-status classification
//! - Success/error response envelopes
//! - CUI normalization and validation
//! - Search-criteria query serialization
//! - Domain record shapes (company, balance sheets, debts, gazette entries)
//!
//! It is transport-free: the HTTP client lives in `openfirme-client`.
//!
//! ## Example
//!
//! ```rust
//! use openfirme_core::{normalize_cui, SearchCriteria};
//!
//! let cui = normalize_cui("RO 123-456-78").unwrap();
//! assert_eq!(cui, "12345678");
//!
//! let query = SearchCriteria::default().with_judet("B").to_query_string();
//! assert_eq!(query, "judet=B");
//! ```

pub mod cui;
pub mod envelope;
pub mod error;
pub mod search;
pub mod types;

// Re-exports for convenience
pub use cui::{normalize_cui, CODE_INVALID_CUI};
pub use envelope::{ApiEnvelope, ErrorEnvelope};
pub use error::{classify_status, OpenFirmeError};
pub use search::SearchCriteria;
pub use types::*;
