//! Wire shapes of the ExchangeRate-API v6 responses.
//!
//! Both endpoints share an envelope: `result` is `"success"` or `"error"`,
//! and error bodies carry an `error-type` such as `invalid-key` or
//! `unsupported-code`. Fields that only exist on success are optional here so
//! that error bodies still deserialize.

use serde::{Deserialize, Serialize};

use crate::domain::{Catalog, ConversionQuote, CurrencyCode};
use crate::error::ProviderError;

const RESULT_SUCCESS: &str = "success";

/// Response of `GET {base}/codes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedCodesResponse {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_code: Option<String>,
    #[serde(default)]
    pub supported_codes: Vec<(String, String)>,
    #[serde(rename = "error-type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl SupportedCodesResponse {
    /// Converts a successful body into a catalog.
    pub fn into_catalog(self) -> Result<Catalog, ProviderError> {
        if self.result != RESULT_SUCCESS {
            return Err(rejected(self.error_type));
        }
        Catalog::from_pairs(self.supported_codes)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

/// Response of `GET {base}/pair/{base}/{target}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairResponse {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_last_update_utc: Option<String>,
    #[serde(rename = "error-type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl PairResponse {
    /// Converts a successful body into a quote.
    ///
    /// Rates that are missing, non-finite or not strictly positive are
    /// rejected, so consumers may divide by a quote's rate.
    pub fn into_quote(self) -> Result<ConversionQuote, ProviderError> {
        if self.result != RESULT_SUCCESS {
            return Err(rejected(self.error_type));
        }
        let base = required_code(self.base_code, "base_code")?;
        let target = required_code(self.target_code, "target_code")?;
        let rate = self
            .conversion_rate
            .ok_or_else(|| ProviderError::InvalidResponse("missing conversion_rate".into()))?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ProviderError::InvalidResponse(format!(
                "conversion_rate must be positive, got {rate}"
            )));
        }
        Ok(ConversionQuote::new(
            base,
            target,
            rate,
            self.time_last_update_utc.unwrap_or_default(),
        ))
    }
}

fn rejected(error_type: Option<String>) -> ProviderError {
    ProviderError::Rejected(error_type.unwrap_or_else(|| "unknown-error".into()))
}

fn required_code(value: Option<String>, field: &str) -> Result<CurrencyCode, ProviderError> {
    let raw = value.ok_or_else(|| ProviderError::InvalidResponse(format!("missing {field}")))?;
    CurrencyCode::new(&raw).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_success() {
        let body = r#"{
            "result": "success",
            "documentation": "https://www.exchangerate-api.com/docs",
            "supported_codes": [["USD", "United States Dollar"], ["BRL", "Brazilian Real"]]
        }"#;
        let resp: SupportedCodesResponse = serde_json::from_str(body).unwrap();
        let catalog = resp.into_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.as_slice()[1].label(), "BRL - Brazilian Real");
    }

    #[test]
    fn test_codes_error_body() {
        let body = r#"{"result": "error", "error-type": "invalid-key"}"#;
        let resp: SupportedCodesResponse = serde_json::from_str(body).unwrap();
        let err = resp.into_catalog().unwrap_err();
        assert!(matches!(err, ProviderError::Rejected(ref t) if t == "invalid-key"));
    }

    #[test]
    fn test_pair_success() {
        let body = r#"{
            "result": "success",
            "time_last_update_utc": "Fri, 27 Mar 2020 00:00:01 +0000",
            "base_code": "USD",
            "target_code": "BRL",
            "conversion_rate": 5.0123
        }"#;
        let resp: PairResponse = serde_json::from_str(body).unwrap();
        let quote = resp.into_quote().unwrap();
        assert_eq!(quote.base, "USD");
        assert_eq!(quote.target, "BRL");
        assert_eq!(quote.rate, 5.0123);
        assert_eq!(quote.as_of, "Fri, 27 Mar 2020 00:00:01 +0000");
    }

    #[test]
    fn test_pair_zero_rate_rejected() {
        let body = r#"{"result": "success", "base_code": "USD", "target_code": "BRL", "conversion_rate": 0}"#;
        let resp: PairResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(resp.into_quote(), Err(ProviderError::InvalidResponse(_))));
    }

    #[test]
    fn test_pair_unsupported_code() {
        let body = r#"{"result": "error", "error-type": "unsupported-code"}"#;
        let resp: PairResponse = serde_json::from_str(body).unwrap();
        let err = resp.into_quote().unwrap_err();
        assert_eq!(err.to_string(), "Provider rejected request: unsupported-code");
    }
}
