//! Runtime settings for the HTTP shell, read from the environment

use crate::error::ResponderError;
use crate::Result;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Load settings from the process environment (and `.env`, if present)
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `PORT` wins over `API_PORT`; both are optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT").or_else(|| lookup("API_PORT")) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                ResponderError::Config(format!("invalid port {:?}: {}", raw, e))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_port_precedence() {
        let settings =
            Settings::from_lookup(lookup_from(&[("PORT", "9000"), ("API_PORT", "8080")])).unwrap();
        assert_eq!(settings.port, 9000);

        let settings = Settings::from_lookup(lookup_from(&[("API_PORT", "8080")])).unwrap();
        assert_eq!(settings.port, 8080);
    }

    #[test]
    fn test_custom_host() {
        let settings = Settings::from_lookup(lookup_from(&[("HOST", "127.0.0.1")])).unwrap();
        assert_eq!(settings.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_invalid_port() {
        let err = Settings::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ResponderError::Config(_)));
        assert!(err.to_string().contains("invalid port"));
    }
}
