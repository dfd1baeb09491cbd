use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::error::{NutriError, Result};

pub const DEFAULT_PORT: &str = "5000";
pub const DEFAULT_CATALOG_PATH: &str = "data/merged_food.json";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub catalog_path: PathBuf,
    pub cors_origin: String,
}

impl Config {
    /// Load from process environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            catalog_path: try_load(&lookup, "NUTRI_CATALOG", DEFAULT_CATALOG_PATH)?,
            cors_origin: try_load(&lookup, "NUTRI_CORS_ORIGIN", DEFAULT_CORS_ORIGIN)?,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            NutriError::Config(format!("invalid {key} value: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [("PORT", "8080"), ("NUTRI_CATALOG", "foods.csv")]
            .into_iter()
            .collect();
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_path, PathBuf::from("foods.csv"));
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(|k| (k == "PORT").then(|| "eighty".to_string()));
        assert!(matches!(result, Err(NutriError::Config(_))));
    }
}
