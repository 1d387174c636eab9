//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::domain::query::DEFAULT_PAGE_SIZE;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Where the ledgers persist their collections.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    Files { dir: PathBuf },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub storage: StorageBackend,
    /// JSON fixture with restaurants and fallback collections.
    pub seed_path: Option<PathBuf>,
    pub page_size: usize,
}

impl Config {
    /// Reads `.env` (if present) and the process environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| {
            info!("BIND_ADDR not set, using default: {}", DEFAULT_BIND_ADDR);
            DEFAULT_BIND_ADDR.to_string()
        });

        let storage = match lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(database_url) => StorageBackend::Postgres { database_url },
            None => {
                let dir = lookup("DATA_DIR").unwrap_or_else(|| {
                    info!("DATABASE_URL and DATA_DIR not set, using file store at {}", DEFAULT_DATA_DIR);
                    DEFAULT_DATA_DIR.to_string()
                });
                StorageBackend::Files { dir: dir.into() }
            }
        };

        let seed_path = lookup("SEED_PATH").map(PathBuf::from);
        let page_size = parse_or_default(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?.max(1);

        Ok(Self {
            bind_addr,
            storage,
            seed_path,
            page_size,
        })
    }
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got '{}'", key, raw)),
        None => {
            info!("{} not set, using default: {}", key, default);
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_file_store() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(
            config.storage,
            StorageBackend::Files {
                dir: PathBuf::from(DEFAULT_DATA_DIR)
            }
        );
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn database_url_selects_postgres() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/lunchboxd"),
            ("DATA_DIR", "/ignored"),
        ]))
        .unwrap();
        assert!(matches!(config.storage, StorageBackend::Postgres { .. }));
    }

    #[test]
    fn bad_page_size_is_an_error() {
        assert!(Config::from_lookup(lookup(&[("PAGE_SIZE", "twelve")])).is_err());
        let config = Config::from_lookup(lookup(&[("PAGE_SIZE", "0")])).unwrap();
        assert_eq!(config.page_size, 1);
    }
}
