use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gist_api_base: String,
    pub fetch_timeout: Duration,
    pub palette_path: String,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            gist_api_base: env_or("GIST_API_BASE", "https://api.github.com"),
            fetch_timeout: Duration::from_secs(
                env_or("FETCH_TIMEOUT_SECS", "15")
                    .parse::<u64>()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            palette_path: env_or("PALETTE_PATH", "palette.json"),
            session_ttl: Duration::from_secs(
                env_or("SESSION_TTL_SECS", "3600")
                    .parse::<u64>()
                    .context("SESSION_TTL_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            gist_api_base: "https://api.github.com".to_string(),
            fetch_timeout: Duration::from_secs(15),
            palette_path: "palette.json".to_string(),
            session_ttl: Duration::from_secs(3600),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
