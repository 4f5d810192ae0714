use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::bookings::DEFAULT_PAGE_SIZE;

/// Flask backend of the reminder bot, mounted under `/api`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_LOG_DIR: &str = "./logs";

pub const ENV_API_URL: &str = "SALESDESK_API_URL";
pub const ENV_PAGE_SIZE: &str = "SALESDESK_PAGE_SIZE";
pub const ENV_LOG_DIR: &str = "SALESDESK_LOG_DIR";
pub const ENV_DEBUG: &str = "DEBUG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub log_dir: PathBuf,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and then reads the process environment.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup(ENV_API_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let page_size = lookup(ENV_PAGE_SIZE)
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(defaults.page_size);

        let log_dir = lookup(ENV_LOG_DIR).map_or(defaults.log_dir, PathBuf::from);

        let debug = lookup(ENV_DEBUG).is_some_and(|value| {
            matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
        });

        Self {
            api_base_url,
            page_size,
            log_dir,
            debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn environment_overrides_are_normalised() {
        let config = config_from(&[
            (ENV_API_URL, " https://bookings.example.com/api/ "),
            (ENV_PAGE_SIZE, "25"),
            (ENV_LOG_DIR, "/tmp/salesdesk"),
            (ENV_DEBUG, "true"),
        ]);

        assert_eq!(config.api_base_url, "https://bookings.example.com/api");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/salesdesk"));
        assert!(config.debug);
    }

    #[test]
    fn invalid_page_size_falls_back_to_default() {
        assert_eq!(config_from(&[(ENV_PAGE_SIZE, "0")]).page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config_from(&[(ENV_PAGE_SIZE, "ten")]).page_size, DEFAULT_PAGE_SIZE);
    }
}
