//! Service configuration, read from command-line flags or environment variables.

use clap::{Parser, ValueEnum};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "product-catalog")]
#[command(about = "Product catalog microservice")]
pub struct CatalogConfig {
    /// SQLite connection string, e.g. `sqlite://catalog.db` or `sqlite::memory:`.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    pub database_url: String,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value = "5")]
    pub max_connections: u32,

    /// Capacity of the request channel in front of the catalog.
    #[arg(long, env = "CATALOG_BUFFER_SIZE", default_value = "32")]
    pub buffer_size: usize,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 5,
            buffer_size: 32,
            log_format: LogFormat::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = CatalogConfig::try_parse_from([
            "product-catalog",
            "--database-url",
            "sqlite://catalog.db",
            "--max-connections",
            "8",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite://catalog.db");
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let result = CatalogConfig::try_parse_from(["product-catalog", "--buffer-size", "lots"]);
        assert!(result.is_err());
    }

    #[test]
    fn default_matches_documented_values() {
        let config = CatalogConfig::default();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.log_format, LogFormat::Compact);
    }
}
