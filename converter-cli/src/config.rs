//! Configuration loading from environment.

use std::env;

use converter_types::CurrencyCode;
use converter_widget::WidgetConfig;
use exchange_rate_client::DEFAULT_API_URL;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: Option<String>,
    pub default_from: CurrencyCode,
    pub default_to: CurrencyCode,
    pub offline: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = get("EXCHANGE_RATE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_key = get("EXCHANGE_RATE_API_KEY").filter(|k| !k.trim().is_empty());

        let default_from = parse_code(
            "CONVERTER_DEFAULT_FROM",
            get("CONVERTER_DEFAULT_FROM").as_deref().unwrap_or("USD"),
        )?;
        let default_to = parse_code(
            "CONVERTER_DEFAULT_TO",
            get("CONVERTER_DEFAULT_TO").as_deref().unwrap_or("BRL"),
        )?;

        let offline = match get("CONVERTER_OFFLINE") {
            Some(value) => parse_flag("CONVERTER_OFFLINE", &value)?,
            None => false,
        };

        Ok(Self {
            api_url,
            api_key,
            default_from,
            default_to,
            offline,
        })
    }

    /// Widget settings derived from this configuration.
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig::new(self.default_from.clone(), self.default_to.clone())
    }
}

pub fn parse_code(name: &str, value: &str) -> anyhow::Result<CurrencyCode> {
    value
        .parse()
        .map_err(|e| anyhow::anyhow!("{} is not a currency code: {}", name, e))
}

fn parse_flag(name: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{} must be a boolean, got {:?}", name, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_key, None);
        assert_eq!(config.default_from, "USD");
        assert_eq!(config.default_to, "BRL");
        assert!(!config.offline);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("EXCHANGE_RATE_API_KEY", "abc123"),
            ("CONVERTER_DEFAULT_FROM", "eur"),
            ("CONVERTER_DEFAULT_TO", "GBP"),
            ("CONVERTER_OFFLINE", "yes"),
        ])
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.widget_config().default_from, "EUR");
        assert_eq!(config.widget_config().default_to, "GBP");
        assert!(config.offline);
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = load(&[("EXCHANGE_RATE_API_KEY", "  ")]).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("CONVERTER_DEFAULT_FROM", "dollars")]).is_err());
        assert!(load(&[("CONVERTER_OFFLINE", "maybe")]).is_err());
    }
}
