//! Configuration management for the trading gateway
//!
//! Configuration is read from environment variables (optionally seeded from a
//! `.env` file), with defaults suitable for local development.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Get the environment name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue(format!(
                "Invalid environment: '{}'. Expected: dev, staging, or prod",
                s
            ))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Current environment
    pub environment: Environment,

    /// Interface the listener binds to
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Rate limit: requests per second per client. `None` disables limiting.
    pub rate_limit_rps: Option<u32>,

    /// Key rate limiting on `x-forwarded-for` / `x-real-ip` instead of the
    /// peer address. Enable only behind a proxy that overwrites these headers.
    pub trust_proxy_headers: bool,

    /// CORS allowed origins, comma separated
    pub cors_allowed_origins: Option<String>,

    /// Log level (RUST_LOG)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3001,
            rate_limit_rps: None,
            trust_proxy_headers: false,
            cors_allowed_origins: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let environment = match lookup("ENVIRONMENT") {
            Some(value) => value.parse::<Environment>()?,
            None => defaults.environment,
        };

        let host = match lookup("HOST") {
            Some(value) => value.trim().parse::<IpAddr>().map_err(|_| {
                ConfigError::InvalidValue(format!("HOST must be an IP address, got '{}'", value))
            })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(format!("PORT must be a valid number, got '{}'", value)))?,
            None => defaults.port,
        };

        let rate_limit_rps = match lookup("RATE_LIMIT_RPS") {
            Some(value) => {
                let rps = value.trim().parse::<u32>().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "RATE_LIMIT_RPS must be a non-negative integer, got '{}'",
                        value
                    ))
                })?;
                (rps > 0).then_some(rps)
            }
            None => defaults.rate_limit_rps,
        };

        let trust_proxy_headers = match lookup("TRUST_PROXY_HEADERS") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                ConfigError::InvalidValue(format!(
                    "TRUST_PROXY_HEADERS must be true or false, got '{}'",
                    value
                ))
            })?,
            None => defaults.trust_proxy_headers,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS").filter(|s| !s.trim().is_empty());

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        Ok(Config {
            environment,
            host,
            port,
            rate_limit_rps,
            trust_proxy_headers,
            cors_allowed_origins,
            log_level,
        })
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!("staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );

        // Case insensitive
        assert_eq!("DEV".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);

        // Invalid
        assert!("invalid".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_as_str() {
        assert_eq!(Environment::Development.as_str(), "development");
        assert_eq!(Environment::Staging.as_str(), "staging");
        assert_eq!(Environment::Production.as_str(), "production");
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.socket_addr(), "127.0.0.1:3001".parse::<SocketAddr>().unwrap());
        assert_eq!(config.rate_limit_rps, None);
        assert!(!config.trust_proxy_headers);
        assert!(config.cors_allowed_origins.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_values_read_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "prod"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("RATE_LIMIT_RPS", "25"),
            ("TRUST_PROXY_HEADERS", "TRUE"),
            ("CORS_ALLOWED_ORIGINS", "https://app.example.com"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.rate_limit_rps, Some(25));
        assert!(config.trust_proxy_headers);
        assert_eq!(
            config.cors_allowed_origins.as_deref(),
            Some("https://app.example.com")
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_zero_rate_limit_disables_limiter() {
        let config = Config::from_lookup(lookup_from(&[("RATE_LIMIT_RPS", "0")])).unwrap();
        assert_eq!(config.rate_limit_rps, None);
    }

    #[test]
    fn test_blank_cors_origins_treated_as_unset() {
        let config = Config::from_lookup(lookup_from(&[("CORS_ALLOWED_ORIGINS", "  ")])).unwrap();
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
        assert!(err.to_string().contains("not-a-port"));

        let err = Config::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));

        let err = Config::from_lookup(lookup_from(&[("HOST", "localhost:80")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = Config::from_lookup(lookup_from(&[("RATE_LIMIT_RPS", "-5")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = Config::from_lookup(lookup_from(&[("TRUST_PROXY_HEADERS", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = Config::from_lookup(lookup_from(&[("ENVIRONMENT", "qa")])).unwrap_err();
        assert!(err.to_string().contains("qa"));
    }
}
