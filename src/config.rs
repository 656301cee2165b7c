//! Runtime configuration from the process environment and an optional `.env`.

use std::fmt;
use std::path::PathBuf;

use log::debug;

use crate::location::nominatim::{DEFAULT_NOMINATIM_URL, DEFAULT_USER_AGENT};

pub const DEFAULT_TABLE: &str = "nuforc_sightings";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub table: String,
    pub geocode_cache: Option<PathBuf>,
    pub nominatim_url: String,
    pub nominatim_user_agent: String,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(var) => write!(f, "{} is not set (environment or .env)", var),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env loaded: {}", e),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            supabase_url: get("SUPABASE_URL"),
            supabase_key: get("SUPABASE_KEY"),
            table: get("SIGHTINGS_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            geocode_cache: get("GEOCODE_CACHE").map(PathBuf::from),
            nominatim_url: get("NOMINATIM_URL").unwrap_or_else(|| DEFAULT_NOMINATIM_URL.to_string()),
            nominatim_user_agent: get("NOMINATIM_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// Store credentials, required only by jobs that touch the store.
    pub fn supabase_credentials(&self) -> Result<(&str, &str), ConfigError> {
        let url = self
            .supabase_url
            .as_deref()
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let key = self
            .supabase_key
            .as_deref()
            .ok_or(ConfigError::Missing("SUPABASE_KEY"))?;
        Ok((url, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]);
        assert_eq!(c.table, "nuforc_sightings");
        assert_eq!(c.nominatim_url, DEFAULT_NOMINATIM_URL);
        assert!(c.geocode_cache.is_none());
        assert_eq!(c.supabase_credentials(), Err(ConfigError::Missing("SUPABASE_URL")));
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_KEY", "secret"),
            ("SIGHTINGS_TABLE", "sightings"),
            ("GEOCODE_CACHE", "/tmp/cache.json"),
        ]);
        assert_eq!(c.table, "sightings");
        assert_eq!(c.geocode_cache, Some(PathBuf::from("/tmp/cache.json")));
        assert_eq!(c.supabase_credentials(), Ok(("https://abc.supabase.co", "secret")));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let c = config(&[("SUPABASE_URL", "https://abc.supabase.co"), ("SUPABASE_KEY", "  ")]);
        assert_eq!(c.supabase_credentials(), Err(ConfigError::Missing("SUPABASE_KEY")));
    }

    #[test]
    fn test_missing_display() {
        assert_eq!(
            ConfigError::Missing("SUPABASE_KEY").to_string(),
            "SUPABASE_KEY is not set (environment or .env)"
        );
    }
}
