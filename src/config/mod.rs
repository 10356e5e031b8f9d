//! Configuration module for the taskboard backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for API authentication (required in production)
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Frontend base URL used to render shareable invite URLs
    pub frontend_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_psk = env::var("TASKBOARD_API_PSK").ok();

        let db_path = env::var("TASKBOARD_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("TASKBOARD_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid TASKBOARD_BIND_ADDR format");

        let log_level = env::var("TASKBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let frontend_url = env::var("TASKBOARD_FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            api_psk,
            db_path,
            bind_addr,
            log_level,
            frontend_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("TASKBOARD_API_PSK");
        env::remove_var("TASKBOARD_DB_PATH");
        env::remove_var("TASKBOARD_BIND_ADDR");
        env::remove_var("TASKBOARD_LOG_LEVEL");
        env::remove_var("TASKBOARD_FRONTEND_URL");

        let config = Config::from_env();

        assert!(config.api_psk.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/app.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.frontend_url, "http://localhost:3000");
    }
}
