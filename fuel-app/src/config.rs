//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use fuel_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub timeout: Duration,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port: u16 = match lookup("PORT") {
            Some(v) => v
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", v, e))?,
            None => 5050,
        };

        let api_url = lookup("OPET_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("OPET_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse()
                    .map_err(|e| anyhow::anyhow!("invalid OPET_TIMEOUT_SECS {:?}: {}", v, e))?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty());

        Ok(Self {
            port,
            api_url,
            timeout,
            otlp_endpoint,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url).with_timeout(self.timeout)
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
        assert_eq!(config.port, 5050);
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("OPET_API_URL", "http://localhost:9000/api/fuelprices/"),
            ("OPET_TIMEOUT_SECS", "3"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
        assert_eq!(
            config.client_config().base_url,
            "http://localhost:9000/api/fuelprices"
        );
    }

    #[test]
    fn test_invalid_port() {
        assert!(load(&[("PORT", "eighty")]).is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(load(&[("OPET_TIMEOUT_SECS", "-1")]).is_err());
    }

    #[test]
    fn test_empty_otlp_endpoint_disables_export() {
        let config = load(&[("OTEL_EXPORTER_OTLP_ENDPOINT", "")]).unwrap();
        assert!(config.otlp_endpoint.is_none());
    }
}
