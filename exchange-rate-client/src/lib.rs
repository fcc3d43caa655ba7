//! # ExchangeRate-API Client
//!
//! A typed Rust client for the two ExchangeRate-API v6 endpoints the
//! converter needs, plus its [`RateProvider`] implementation.
//!
//! The API key travels as a URL path segment:
//! `https://v6.exchangerate-api.com/v6/{key}/codes`.

use async_trait::async_trait;
use converter_types::{
    Catalog, ConversionQuote, CurrencyCode, PairResponse, ProviderError, RateProvider,
    SupportedCodesResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Public endpoint root, without the key segment.
pub const DEFAULT_API_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for ProviderError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => ProviderError::Transport(e.to_string()),
            ClientError::Api { message, .. } => ProviderError::Rejected(message),
            ClientError::Json(e) => ProviderError::InvalidResponse(e.to_string()),
        }
    }
}

/// ExchangeRate-API client.
pub struct ExchangeRateClient {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl ExchangeRateClient {
    /// Creates a new client rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            http: Client::new(),
        }
    }

    /// Sets the API key, sent as the first path segment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Fetches the raw list of supported codes.
    #[instrument(name = "ExchangeRateCodes", skip_all)]
    pub async fn supported_codes(&self) -> Result<SupportedCodesResponse, ClientError> {
        self.get("/codes").await
    }

    /// Fetches the raw conversion rate for an ordered pair.
    #[instrument(name = "ExchangeRatePair", skip_all, fields(base = %base, target = %target))]
    pub async fn pair(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<PairResponse, ClientError> {
        self.get(&format!("/pair/{}/{}", base, target)).await
    }

    fn endpoint(&self, path: &str) -> String {
        match &self.api_key {
            Some(key) => format!("{}/{}{}", self.base_url, key, path),
            None => format!("{}{}", self.base_url, path),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!(path, "GET");
        let resp = self.http.get(self.endpoint(path)).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error-type")
                        .and_then(|e| e.as_str())
                        .map(String::from)
                })
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl RateProvider for ExchangeRateClient {
    async fn list_currencies(&self) -> Result<Catalog, ProviderError> {
        let catalog = self.supported_codes().await?.into_catalog()?;
        debug!(count = catalog.len(), "loaded supported codes");
        Ok(catalog)
    }

    async fn get_rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<ConversionQuote, ProviderError> {
        self.pair(base, target).await?.into_quote()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ExchangeRateClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = ExchangeRateClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_key_is_a_path_segment() {
        let client = ExchangeRateClient::new(DEFAULT_API_URL).with_api_key("test-key");
        assert_eq!(
            client.endpoint("/codes"),
            "https://v6.exchangerate-api.com/v6/test-key/codes"
        );
    }

    #[test]
    fn test_endpoint_without_key() {
        let client = ExchangeRateClient::new("http://localhost:3000");
        assert_eq!(
            client.endpoint("/pair/USD/BRL"),
            "http://localhost:3000/pair/USD/BRL"
        );
    }

    #[test]
    fn test_api_error_maps_to_rejected() {
        let err: ProviderError = ClientError::Api {
            status: 403,
            message: "invalid-key".into(),
        }
        .into();
        assert!(matches!(err, ProviderError::Rejected(m) if m == "invalid-key"));
    }
}
