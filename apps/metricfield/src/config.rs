//! # Registry Configuration
//!
//! Loads alias overrides from a TOML file and layers them on top of the
//! built-in registry.
//!
//! ```toml
//! [aliases]
//! trust = ["trust", "brand", "credibility"]
//! ```

use crate::error::Result;
use metricfield_core::MetricFieldRegistry;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk shape of a registry override file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Metric id to alias list, as written. Validated by `into_registry`.
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl RegistryConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// The built-in registry with this config's entries applied.
    pub fn into_registry(self) -> Result<MetricFieldRegistry> {
        let overrides = MetricFieldRegistry::from_entries(self.aliases)?;
        Ok(MetricFieldRegistry::builtin().with_overrides(&overrides))
    }
}

/// Registry to use for a run: built-in, or built-in plus the given overrides.
pub fn load_registry(path: Option<&Path>) -> Result<MetricFieldRegistry> {
    match path {
        Some(path) => {
            let config = RegistryConfig::load(path)?;
            tracing::info!(
                "Loaded {} alias override(s) from {}",
                config.aliases.len(),
                path.display()
            );
            config.into_registry()
        }
        None => Ok(MetricFieldRegistry::builtin()),
    }
}
