//! The ordered list of currencies a provider supports.

use serde::{Deserialize, Serialize};

use super::currency::{Currency, CurrencyCode};
use crate::error::DomainError;

/// Full ordered list of supported currencies.
///
/// Fetched once per session and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<Currency>);

impl Catalog {
    pub fn new(currencies: Vec<Currency>) -> Self {
        Self(currencies)
    }

    /// Builds a catalog from raw `(code, name)` pairs as sent over the wire.
    pub fn from_pairs<I, C, N>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(code, name)| Ok(Currency::new(CurrencyCode::new(code.as_ref())?, name)))
            .collect::<Result<Vec<_>, DomainError>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Currency] {
        &self.0
    }

    /// Looks up a currency by its code.
    pub fn find(&self, code: &CurrencyCode) -> Option<&Currency> {
        self.0.iter().find(|c| &c.code == code)
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.find(code).is_some()
    }

    /// Entries whose code or name contains `term`, ignoring case.
    ///
    /// An empty term returns the whole catalog in its original order.
    pub fn filter(&self, term: &str) -> Vec<Currency> {
        let term = term.to_lowercase();
        self.0.iter().filter(|c| c.matches(&term)).cloned().collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Currency;
    type IntoIter = std::slice::Iter<'a, Currency>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_pairs([
            ("USD", "United States Dollar"),
            ("BRL", "Brazilian Real"),
            ("EUR", "Euro"),
            ("AUD", "Australian Dollar"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let catalog = catalog();
        assert_eq!(catalog.filter(""), catalog.as_slice());
    }

    #[test]
    fn test_filter_matches_code_case_insensitive() {
        let hits = catalog().filter("bRl");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "BRL");
    }

    #[test]
    fn test_filter_matches_name_substring_in_order() {
        let hits = catalog().filter("DOLLAR");
        let codes: Vec<_> = hits.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["USD", "AUD"]);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(catalog().filter("yen").is_empty());
    }

    #[test]
    fn test_filter_handles_accented_names() {
        let catalog = Catalog::from_pairs([("USD", "Dólar"), ("BRL", "Real")]).unwrap();
        let hits = catalog.filter("DÓL");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "USD");
    }

    #[test]
    fn test_find_and_contains() {
        let catalog = catalog();
        let eur = CurrencyCode::new("EUR").unwrap();
        assert_eq!(catalog.find(&eur).map(|c| c.name.as_str()), Some("Euro"));
        assert!(!catalog.contains(&CurrencyCode::new("JPY").unwrap()));
    }

    #[test]
    fn test_from_pairs_rejects_bad_code() {
        let result = Catalog::from_pairs([("USD", "Dollar"), ("??", "Broken")]);
        assert!(matches!(result, Err(DomainError::InvalidCurrencyCode(_))));
    }
}
