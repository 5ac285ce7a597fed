//! Company search criteria
//!
//! All filters are optional; absent filters are omitted from the outgoing
//! query string entirely, never sent as empty values. Key order is fixed.

use chrono::NaiveDate;
use url::form_urlencoded;

/// Filters for the `/v1/firme` search endpoint
///
/// # Example
///
/// ```
/// use openfirme_core::SearchCriteria;
///
/// let criteria = SearchCriteria::default()
///     .with_judet("B")
///     .with_tva(true)
///     .with_page(2);
/// assert_eq!(criteria.to_query_string(), "judet=B&tva=1&page=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Free-text term matched against company names.
    pub q: Option<String>,
    /// County code (e.g. "B" for Bucharest, "CJ" for Cluj).
    pub judet: Option<String>,
    pub localitate: Option<String>,
    /// CAEN activity-classification code.
    pub caen: Option<String>,
    /// Registration status filter.
    pub stare: Option<String>,
    /// Exact registration date.
    pub data: Option<NaiveDate>,
    pub data_start: Option<NaiveDate>,
    pub data_end: Option<NaiveDate>,
    /// VAT-payer flag.
    pub tva: Option<bool>,
    /// Has-phone-number flag.
    pub telefon: Option<bool>,
    pub page: Option<u32>,
}

impl SearchCriteria {
    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn with_judet(mut self, judet: impl Into<String>) -> Self {
        self.judet = Some(judet.into());
        self
    }

    pub fn with_localitate(mut self, localitate: impl Into<String>) -> Self {
        self.localitate = Some(localitate.into());
        self
    }

    pub fn with_caen(mut self, caen: impl Into<String>) -> Self {
        self.caen = Some(caen.into());
        self
    }

    pub fn with_stare(mut self, stare: impl Into<String>) -> Self {
        self.stare = Some(stare.into());
        self
    }

    pub fn with_data(mut self, data: NaiveDate) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_data_start(mut self, data_start: NaiveDate) -> Self {
        self.data_start = Some(data_start);
        self
    }

    pub fn with_data_end(mut self, data_end: NaiveDate) -> Self {
        self.data_end = Some(data_end);
        self
    }

    pub fn with_tva(mut self, tva: bool) -> Self {
        self.tva = Some(tva);
        self
    }

    pub fn with_telefon(mut self, telefon: bool) -> Self {
        self.telefon = Some(telefon);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Ordered `(key, value)` pairs for the present filters only
    ///
    /// Key order is fixed: `q`, `judet`, `localitate`, `caen`, `stare`,
    /// `data`, `data_start`, `data_end`, `tva`, `telefon`, `page`.
    /// Booleans serialize as `"1"`/`"0"`, dates as `YYYY-MM-DD`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(judet) = &self.judet {
            pairs.push(("judet", judet.clone()));
        }
        if let Some(localitate) = &self.localitate {
            pairs.push(("localitate", localitate.clone()));
        }
        if let Some(caen) = &self.caen {
            pairs.push(("caen", caen.clone()));
        }
        if let Some(stare) = &self.stare {
            pairs.push(("stare", stare.clone()));
        }
        if let Some(data) = &self.data {
            pairs.push(("data", format_date(data)));
        }
        if let Some(data_start) = &self.data_start {
            pairs.push(("data_start", format_date(data_start)));
        }
        if let Some(data_end) = &self.data_end {
            pairs.push(("data_end", format_date(data_end)));
        }
        if let Some(tva) = self.tva {
            pairs.push(("tva", format_flag(tva)));
        }
        if let Some(telefon) = self.telefon {
            pairs.push(("telefon", format_flag(telefon)));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }

        pairs
    }

    /// Percent-encoded query string; empty when no filters are set.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_flag(flag: bool) -> String {
    if flag { "1" } else { "0" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_produce_empty_query() {
        assert_eq!(SearchCriteria::default().to_query_string(), "");
    }

    #[test]
    fn test_key_order_is_fixed() {
        let criteria = SearchCriteria::default()
            .with_page(2)
            .with_tva(true)
            .with_judet("B");
        assert_eq!(criteria.to_query_string(), "judet=B&tva=1&page=2");
    }

    #[test]
    fn test_booleans_serialize_as_digits() {
        let criteria = SearchCriteria::default().with_tva(false).with_telefon(true);
        assert_eq!(criteria.to_query_string(), "tva=0&telefon=1");
    }

    #[test]
    fn test_dates_serialize_iso() {
        let criteria = SearchCriteria::default()
            .with_data_start(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap())
            .with_data_end(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
        assert_eq!(
            criteria.to_query_string(),
            "data_start=2020-01-05&data_end=2020-12-31"
        );
    }

    #[test]
    fn test_free_text_is_percent_encoded() {
        let criteria = SearchCriteria::default().with_q("ACME impex");
        assert_eq!(criteria.to_query_string(), "q=ACME+impex");
    }

    #[test]
    fn test_all_keys_in_declared_order() {
        let criteria = SearchCriteria::default()
            .with_q("acme")
            .with_judet("CJ")
            .with_localitate("Cluj-Napoca")
            .with_caen("6201")
            .with_stare("activa")
            .with_data(NaiveDate::from_ymd_opt(2019, 6, 1).unwrap())
            .with_data_start(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap())
            .with_data_end(NaiveDate::from_ymd_opt(2019, 12, 31).unwrap())
            .with_tva(true)
            .with_telefon(false)
            .with_page(3);

        let keys: Vec<&str> = criteria.to_query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "q",
                "judet",
                "localitate",
                "caen",
                "stare",
                "data",
                "data_start",
                "data_end",
                "tva",
                "telefon",
                "page",
            ]
        );
    }
}
