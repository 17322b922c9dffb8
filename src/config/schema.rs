//! Configuration schema for cacheopt
//!
//! Configuration is stored at `~/.config/cacheopt/config.toml`

use crate::cache::CacheSpec;
use crate::error::CacheOptResult;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cache option settings
    pub cache: CacheConfig,
}

impl Config {
    /// Check values that have their own syntax
    pub fn validate(&self) -> CacheOptResult<()> {
        if let Some(spec) = &self.cache.default_spec {
            CacheSpec::parse(spec)?;
        }
        Ok(())
    }
}

/// Cache option configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache option string used when `parse` is given none
    pub default_spec: Option<String>,
}
