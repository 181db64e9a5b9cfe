//! Endpoint configuration, read from the environment (after `.env`).

use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_STOPS_URL: &str = "https://shuttles.rpi.edu/stops";
/// Served over plain HTTP, unlike the stops endpoint.
pub const DEFAULT_ROUTES_URL: &str = "http://shuttles.rpi.edu/routes";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub stops_url: String,
    pub routes_url: String,
    /// `None` waits on the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stops_url: DEFAULT_STOPS_URL.to_string(),
            routes_url: DEFAULT_ROUTES_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Reads `SHUTTLE_STOPS_URL`, `SHUTTLE_ROUTES_URL` and
    /// `SHUTTLE_TIMEOUT_SECS`, falling back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let timeout = match lookup("SHUTTLE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("SHUTTLE_TIMEOUT_SECS is not a number: {raw:?}"))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            stops_url: lookup("SHUTTLE_STOPS_URL").unwrap_or(defaults.stops_url),
            routes_url: lookup("SHUTTLE_ROUTES_URL").unwrap_or(defaults.routes_url),
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_keep_original_schemes() {
        let config = from_map(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.stops_url.starts_with("https://"));
        assert!(config.routes_url.starts_with("http://"));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_overrides() {
        let config = from_map(&[
            ("SHUTTLE_STOPS_URL", "http://localhost:8080/stops"),
            ("SHUTTLE_TIMEOUT_SECS", " 15 "),
        ])
        .unwrap();
        assert_eq!(config.stops_url, "http://localhost:8080/stops");
        assert_eq!(config.routes_url, DEFAULT_ROUTES_URL);
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_bad_timeout() {
        let err = from_map(&[("SHUTTLE_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("SHUTTLE_TIMEOUT_SECS"));
    }
}
