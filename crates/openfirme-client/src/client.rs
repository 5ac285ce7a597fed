//! OpenFirme API client and call catalog
//!
//! One method per remote operation. Each method validates its input,
//! builds the path and delegates to the transport core; no decision logic
//! lives here beyond input normalization.

use openfirme_core::{
    normalize_cui, BalanceSheet, Company, FreeCompany, FreeUsage, MofRecord, OpenFirmeError,
    SearchCriteria, SearchResult, TaxRecord,
};

use crate::config::ClientConfig;
use crate::transport::{Tier, Transport};

/// Client for the OpenFirme company-registry API
///
/// Cloning is cheap (the underlying `reqwest::Client` is reference-counted)
/// and clones share nothing mutable; concurrent calls are fully independent.
///
/// # Example
///
/// ```ignore
/// use openfirme_client::{ClientConfig, OpenFirmeClient};
///
/// let client = OpenFirmeClient::new(ClientConfig::new("of_live_abc123"))?;
/// let company = client.company("RO12345678").await?;
/// println!("{}", company.denumire);
/// ```
#[derive(Debug, Clone)]
pub struct OpenFirmeClient {
    transport: Transport,
    config: ClientConfig,
}

impl OpenFirmeClient {
    /// Create a client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`OpenFirmeError::Validation`] with code `MISSING_API_KEY`
    /// when the credential is empty. No other configuration is read before
    /// this check.
    pub fn new(config: ClientConfig) -> Result<Self, OpenFirmeError> {
        config.validate()?;
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client over a caller-supplied `reqwest::Client`
    ///
    /// Useful for injecting custom TLS or proxy settings. The per-request
    /// timeout still comes from `config.timeout_ms`.
    pub fn with_http_client(
        http: reqwest::Client,
        config: ClientConfig,
    ) -> Result<Self, OpenFirmeError> {
        config.validate()?;
        let transport = Transport::new(http, &config)?;
        Ok(Self { transport, config })
    }

    /// The configuration this client was constructed with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full company record for a CUI
    pub async fn company(&self, cui: &str) -> Result<Company, OpenFirmeError> {
        let cui = normalize_cui(cui)?;
        self.transport
            .get(&format!("/v1/firma/{cui}"), Tier::Standard)
            .await
    }

    /// Balance-sheet filings for a CUI, one entry per filed year
    pub async fn balance_sheets(&self, cui: &str) -> Result<Vec<BalanceSheet>, OpenFirmeError> {
        let cui = normalize_cui(cui)?;
        self.transport
            .get(&format!("/v1/bilant/{cui}"), Tier::Standard)
            .await
    }

    /// Outstanding tax obligations for a CUI
    pub async fn tax_debts(&self, cui: &str) -> Result<TaxRecord, OpenFirmeError> {
        let cui = normalize_cui(cui)?;
        self.transport
            .get(&format!("/v1/restante/{cui}"), Tier::Standard)
            .await
    }

    /// Official-gazette publications referencing a CUI
    pub async fn publications(&self, cui: &str) -> Result<MofRecord, OpenFirmeError> {
        let cui = normalize_cui(cui)?;
        self.transport
            .get(&format!("/v1/mof/{cui}"), Tier::Standard)
            .await
    }

    /// Search the registry with optional filters
    ///
    /// Unset filters are omitted from the query string entirely; no filters
    /// means a query-less request.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResult, OpenFirmeError> {
        let query = criteria.to_query_string();
        let path = if query.is_empty() {
            "/v1/firme".to_string()
        } else {
            format!("/v1/firme?{query}")
        };
        self.transport.get(&path, Tier::Standard).await
    }

    /// Reduced company record via the free-tier endpoint
    pub async fn free_company(&self, cui: &str) -> Result<FreeCompany, OpenFirmeError> {
        let cui = normalize_cui(cui)?;
        self.transport
            .get(&format!("/free/firma/{cui}"), Tier::Free)
            .await
    }

    /// Free-tier quota usage for the configured key
    pub async fn free_usage(&self) -> Result<FreeUsage, OpenFirmeError> {
        self.transport.get("/free/usage", Tier::Free).await
    }
}
