use crate::errors::ConfigError;
use crate::scraper::ScrapeOptions;
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.firecrawl.dev/v1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub firecrawl_api_key: String,
    pub firecrawl_api_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub scrape_timeout: Duration,
    pub scrape_options: ScrapeOptions,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset and blank are the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let firecrawl_api_key = var("FIRECRAWL_API_KEY")
            .map(|v| v.trim().to_string())
            .ok_or(ConfigError::Missing("FIRECRAWL_API_KEY"))?;

        let firecrawl_api_url =
            var("FIRECRAWL_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let bind_addr: SocketAddr = parse_or(
            "BIND_ADDR",
            var("BIND_ADDR"),
            SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
        )?;

        let max_workers: usize = parse_or("MAX_WORKERS", var("MAX_WORKERS"), DEFAULT_MAX_WORKERS)?;
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_WORKERS",
                reason: "must be at least 1".into(),
            });
        }

        let timeout_secs: u64 = parse_or(
            "SCRAPE_TIMEOUT_SECS",
            var("SCRAPE_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;

        let defaults = ScrapeOptions::default();
        let scrape_options = ScrapeOptions {
            wait_for_ms: parse_or("SCRAPE_WAIT_MS", var("SCRAPE_WAIT_MS"), defaults.wait_for_ms)?,
            include_tags: var("SCRAPE_INCLUDE_TAGS")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.include_tags),
            exclude_tags: var("SCRAPE_EXCLUDE_TAGS")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.exclude_tags),
        };

        Ok(Self {
            firecrawl_api_key,
            firecrawl_api_url,
            bind_addr,
            max_workers,
            scrape_timeout: Duration::from_secs(timeout_secs),
            scrape_options,
        })
    }
}

/// Parses a set variable, or falls back to `default` when it is unset.
fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
