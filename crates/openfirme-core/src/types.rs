//! Domain record types
//!
//! Plain data shapes for the registry payloads. These carry no behavior;
//! the server owns their semantics. Fields the server may omit are
//! `Option` with serde defaults so partial records still decode.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full company record from `/v1/firma/{cui}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub cui: u64,
    pub denumire: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numar_reg_com: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresa: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localitate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_postal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stare: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_inregistrare: Option<NaiveDate>,

    /// CAEN activity-classification code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_caen: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefon: Option<String>,

    /// VAT-payer flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tva: Option<bool>,

    /// Struck off the register.
    #[serde(default)]
    pub radiata: bool,
}

/// Reduced company record inside search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanySummary {
    pub cui: u64,
    pub denumire: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localitate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stare: Option<String>,
}

/// Paginated result of `/v1/firme`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub firme: Vec<CompanySummary>,

    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub pagina: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe_pagina: Option<u64>,
}

/// One fiscal-year balance-sheet filing from `/v1/bilant/{cui}`
///
/// The endpoint returns an array, one element per filed year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceSheet {
    pub an: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cifra_afaceri: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_net: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_brut: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salariati: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datorii: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_circulante: Option<i64>,
}

/// Outstanding tax obligations from `/v1/restante/{cui}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cui: Option<u64>,

    #[serde(default)]
    pub restante: Vec<DebtEntry>,
}

/// A single reported debt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suma: Option<f64>,
}

/// Official-gazette publications for a company, from `/v1/mof/{cui}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MofRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cui: Option<u64>,

    #[serde(default)]
    pub publicatii: Vec<MofPublication>,
}

/// One gazette entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MofPublication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriere: Option<String>,
}

/// Reduced company record from the free-tier `/free/firma/{cui}` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreeCompany {
    pub cui: u64,
    pub denumire: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresa: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stare: Option<String>,
}

/// Free-tier quota usage from `/free/usage`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreeUsage {
    #[serde(default)]
    pub used: u64,

    #[serde(default)]
    pub limit: u64,

    #[serde(default)]
    pub remaining: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_decodes_with_minimal_fields() {
        let company: Company =
            serde_json::from_value(json!({"cui": 12345678, "denumire": "ACME"})).unwrap();
        assert_eq!(company.cui, 12345678);
        assert_eq!(company.denumire, "ACME");
        assert_eq!(company.adresa, None);
        assert!(!company.radiata);
    }

    #[test]
    fn test_company_serialization_roundtrip() {
        let company = Company {
            cui: 12345678,
            denumire: "ACME IMPEX SRL".to_string(),
            numar_reg_com: Some("J40/123/2001".to_string()),
            adresa: Some("Str. Exemplu 1".to_string()),
            judet: Some("B".to_string()),
            localitate: Some("Bucuresti".to_string()),
            cod_postal: Some("010101".to_string()),
            stare: Some("activa".to_string()),
            data_inregistrare: NaiveDate::from_ymd_opt(2001, 3, 15),
            cod_caen: Some("6201".to_string()),
            telefon: Some("+40211234567".to_string()),
            tva: Some(true),
            radiata: false,
        };

        let json = serde_json::to_string(&company).unwrap();
        let parsed: Company = serde_json::from_str(&json).unwrap();
        assert_eq!(company, parsed);
    }

    #[test]
    fn test_balance_sheet_array_decodes() {
        let sheets: Vec<BalanceSheet> = serde_json::from_value(json!([
            {"an": 2022, "cifra_afaceri": 1_000_000, "profit_net": 120_000},
            {"an": 2023, "cifra_afaceri": 1_500_000, "salariati": 12}
        ]))
        .unwrap();
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].an, 2022);
        assert_eq!(sheets[1].salariati, Some(12));
        assert_eq!(sheets[1].profit_net, None);
    }

    #[test]
    fn test_search_result_defaults_when_empty() {
        let result: SearchResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.firme.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.pagina, 0);
    }

    #[test]
    fn test_tax_record_decodes_entries() {
        let record: TaxRecord = serde_json::from_value(json!({
            "cui": 12345678,
            "restante": [{"data": "2024-06-30", "tip": "TVA", "suma": 1234.5}]
        }))
        .unwrap();
        assert_eq!(record.restante.len(), 1);
        assert_eq!(record.restante[0].suma, Some(1234.5));
    }

    #[test]
    fn test_free_usage_defaults() {
        let usage: FreeUsage = serde_json::from_value(json!({})).unwrap();
        assert_eq!(usage.used, 0);
        assert_eq!(usage.limit, 0);
        assert_eq!(usage.remaining, 0);
    }
}
