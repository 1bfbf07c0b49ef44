//! Configuration management for qardboard.
//!
//! Loads configuration from environment variables (with `.env` support)
//! once at startup into an immutable global.

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub qard: QardConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Endpoint and credentials for the Qard API.
#[derive(Debug, Clone)]
pub struct QardConfig {
    pub base_url: String,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port: env_or("PORT", "8080").parse().expect("Invalid PORT"),
            },
            qard: QardConfig {
                base_url: env_or("QARD_API_BASE_URL", "https://api.qard.co"),
                api_key: env_or("QARD_API_KEY", ""),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
