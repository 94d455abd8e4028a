//! TOML configuration for the store pair.
//!
//! A missing config file is not an error — the crate runs local-only with
//! defaults, which is exactly the state a fresh install is in before the
//! operator has entered any backend credentials.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default = "default_cache")]
    pub cache: CacheConfig,
}

/// Remote backend endpoint and credentials. Both fields must be present
/// and non-empty before the remote side is considered configured; anything
/// less keeps the adapter in its fail-fast unconfigured state.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RemoteConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,
}

impl RemoteConfig {
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.url, &self.api_key),
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty()
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// SQLite file backing the local cache.
    #[serde(default = "default_cache_path")]
    pub path: String,
}

fn default_cache() -> CacheConfig {
    CacheConfig {
        path: default_cache_path(),
    }
}

fn default_cache_path() -> String {
    "fleetbook.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: RemoteConfig::default(),
            cache: default_cache(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A file that does not exist yields the defaults. A file that exists
    /// but cannot be read or parsed is reported, not papered over.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
