//! Client configuration.
//!
//! The API key and endpoint settings are read once into a [`MintConfig`] and
//! handed to the client, rather than looked up from the environment on every
//! request.

use std::fmt;
use std::time::Duration;

use crate::error::MintError;
use crate::http::StatusPolicy;
use crate::network::{DEFAULT_API_URL, DEFAULT_COLLECTION_ID};

pub const ENV_API_KEY: &str = "CROSSMINT_API_KEY";
/// Accepted when [`ENV_API_KEY`] is unset or blank.
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";
pub const ENV_BASE_URL: &str = "CROSSMINT_BASE_URL";
pub const ENV_COLLECTION_ID: &str = "CROSSMINT_COLLECTION_ID";
pub const ENV_TIMEOUT_SECS: &str = "CROSSMINT_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq)]
pub struct MintConfig {
    /// Sent as `X-API-KEY`. An empty key is sent as-is.
    pub api_key: String,
    pub base_url: String,
    pub collection_id: String,
    /// `None` means no client-side timeout.
    pub timeout: Option<Duration>,
    pub status_policy: StatusPolicy,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_API_URL.to_string(),
            collection_id: DEFAULT_COLLECTION_ID.to_string(),
            timeout: None,
            status_policy: StatusPolicy::default(),
        }
    }
}

impl fmt::Debug for MintConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MintConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("collection_id", &self.collection_id)
            .field("timeout", &self.timeout)
            .field("status_policy", &self.status_policy)
            .finish()
    }
}

fn redact(key: &str) -> &'static str {
    if key.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

impl MintConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, MintError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MintError> {
        let defaults = Self::default();

        let api_key = lookup(ENV_API_KEY)
            .filter(|s| !s.trim().is_empty())
            .or_else(|| lookup(ENV_API_KEY_FALLBACK))
            .unwrap_or_default();

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) if !raw.trim().is_empty() => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    MintError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            api_key,
            base_url: lookup(ENV_BASE_URL)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.base_url),
            collection_id: lookup(ENV_COLLECTION_ID)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.collection_id),
            timeout,
            status_policy: defaults.status_policy,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = MintConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, MintConfig::default());
        assert!(!config.has_api_key());
        assert_eq!(config.api_key, "");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_primary_key_wins_over_fallback() {
        let config = MintConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "sk_primary"),
            (ENV_API_KEY_FALLBACK, "sk_fallback"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "sk_primary");

        let config =
            MintConfig::from_lookup(lookup_from(&[(ENV_API_KEY_FALLBACK, "sk_fallback")])).unwrap();
        assert_eq!(config.api_key, "sk_fallback");
    }

    #[test]
    fn test_blank_primary_key_falls_back() {
        let config = MintConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "  "),
            (ENV_API_KEY_FALLBACK, "sk_fallback"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "sk_fallback");
    }

    #[test]
    fn test_overrides() {
        let config = MintConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "http://localhost:9000"),
            (ENV_COLLECTION_ID, "col-1"),
            (ENV_TIMEOUT_SECS, " 15 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.collection_id, "col-1");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_bad_timeout_is_config_error() {
        let err = MintConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, MintError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = MintConfig {
            api_key: "sk_staging_secret".into(),
            ..MintConfig::default()
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk_staging_secret"));
        assert!(printed.contains("<redacted>"));
    }
}
