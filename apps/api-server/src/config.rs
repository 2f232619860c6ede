//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use forum_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory gateway.
    pub database: Option<DatabaseConfig>,
    /// Deadline applied to the store calls of a single request.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str, default| parse_or(lookup(key), default);

        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS", 20),
            min_connections: parsed("DB_MIN_CONNECTIONS", 2),
            connect_timeout: Duration::from_secs(10),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(lookup("PORT"), 8080),
            database,
            request_timeout: Duration::from_secs(parse_or(lookup("REQUEST_TIMEOUT_SECS"), 30)),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_database_settings() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://forum@localhost/forum"),
            ("DB_MAX_CONNECTIONS", "50"),
            ("PORT", "not-a-port"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]);

        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://forum@localhost/forum");
        assert_eq!(database.max_connections, 50);
        assert_eq!(database.min_connections, 2);
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
