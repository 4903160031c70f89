use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; a missing `DATABASE_URL` selects the in-memory backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// How many careers a scoring run keeps (top N).
    pub recommendation_limit: usize,
    pub session_ttl_days: i64,
    pub bcrypt_cost: u32,
    /// JSON list of colleges replacing the built-in directory.
    pub colleges_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            recommendation_limit: 3,
            session_ttl_days: 7,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            colleges_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            recommendation_limit: parse_env("RECOMMENDATION_LIMIT", defaults.recommendation_limit)?,
            session_ttl_days: parse_env("SESSION_TTL_DAYS", defaults.session_ttl_days)?,
            bcrypt_cost: parse_env("BCRYPT_COST", defaults.bcrypt_cost)?,
            colleges_file: std::env::var("COLLEGES_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        if config.recommendation_limit == 0 {
            bail!("RECOMMENDATION_LIMIT must be at least 1");
        }
        if config.session_ttl_days <= 0 {
            bail!("SESSION_TTL_DAYS must be positive");
        }
        if !(4..=31).contains(&config.bcrypt_cost) {
            bail!("BCRYPT_COST must be between 4 and 31");
        }

        Ok(config)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
