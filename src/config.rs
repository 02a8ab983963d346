//! Process configuration, resolved once at startup and passed by value.
//!
//! Nothing in the crate reads the environment after this point; the web
//! layer and the Gemini client receive what they need by injection.

use std::collections::HashMap;

use crate::error::{InvoiceInsightError, Result};
use crate::gemini::DEFAULT_MODEL;

pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the remote inference service.
    pub api_key: String,
    /// Gemini model name the client targets.
    pub model: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Fails with [`InvoiceInsightError::Configuration`] when the credential
    /// is absent, so a misconfigured process dies before it binds a socket
    /// instead of failing on the first submit.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Reads configuration from a provided map (useful for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let api_key = non_empty(vars, ENV_API_KEY).ok_or_else(|| {
            InvoiceInsightError::Configuration(format!("{ENV_API_KEY} is not set"))
        })?;

        let model = non_empty(vars, ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let host = non_empty(vars, ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match non_empty(vars, ENV_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                InvoiceInsightError::Configuration(format!(
                    "{ENV_PORT} must be a valid port number, got \"{raw}\""
                ))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            model,
            host,
            port,
        })
    }

    /// Address the presentation layer binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Empty values behave like unset ones; `.env` files often leave blanks.
fn non_empty(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key).filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_api_key_fails_fast() {
        let err = AppConfig::from_vars(&HashMap::new()).unwrap_err();
        assert!(matches!(err, InvoiceInsightError::Configuration(_)));
        assert!(err.to_string().contains(ENV_API_KEY));
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let err = AppConfig::from_vars(&vars(&[(ENV_API_KEY, "")])).unwrap_err();
        assert!(matches!(err, InvoiceInsightError::Configuration(_)));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = AppConfig::from_vars(&vars(&[(ENV_API_KEY, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_vars(&vars(&[
            (ENV_API_KEY, "secret"),
            (ENV_MODEL, "gemini-2.5-flash"),
            (ENV_HOST, "127.0.0.1"),
            (ENV_PORT, "8080"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn invalid_port_is_a_configuration_error() {
        let err = AppConfig::from_vars(&vars(&[(ENV_API_KEY, "secret"), (ENV_PORT, "nope")]))
            .unwrap_err();
        assert!(matches!(err, InvoiceInsightError::Configuration(_)));
        assert!(err.to_string().contains("nope"));
    }
}
