//! # Metric Field Registry
//!
//! Immutable lookup from canonical metric id to its ordered alias list.
//!
//! - Built once, never mutated afterwards
//! - Exact key match only
//! - Unknown ids resolve to a single-element list containing themselves
//! - BTreeMap storage for deterministic iteration

use crate::primitives::BUILTIN_ALIASES;
use crate::types::RegistryError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Process-wide built-in registry, initialised on first use.
static DEFAULT_REGISTRY: LazyLock<MetricFieldRegistry> =
    LazyLock::new(MetricFieldRegistry::builtin);

/// Mapping from canonical metric id to alias field names in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct MetricFieldRegistry {
    aliases: BTreeMap<String, Vec<String>>,
}

impl MetricFieldRegistry {
    /// Build the registry from the compiled-in alias table.
    #[must_use]
    pub fn builtin() -> Self {
        let aliases = BUILTIN_ALIASES
            .iter()
            .map(|(metric, fields)| {
                (
                    (*metric).to_string(),
                    fields.iter().map(|f| (*f).to_string()).collect(),
                )
            })
            .collect();
        Self { aliases }
    }

    /// The shared built-in registry.
    #[must_use]
    pub fn default_registry() -> &'static Self {
        &DEFAULT_REGISTRY
    }

    /// Build a registry from `(metric id, aliases)` entries.
    ///
    /// Later entries for the same id replace earlier ones.
    pub fn from_entries<I, K, A, S>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut aliases = BTreeMap::new();
        for (metric, fields) in entries {
            let metric = metric.into();
            let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
            validate_entry(&metric, &fields)?;
            aliases.insert(metric, fields);
        }
        Ok(Self { aliases })
    }

    /// New registry with `overrides` layered on top of `self`.
    ///
    /// Entries in `overrides` replace same-id entries and add new ones.
    #[must_use]
    pub fn with_overrides(&self, overrides: &Self) -> Self {
        let mut aliases = self.aliases.clone();
        aliases.extend(
            overrides
                .aliases
                .iter()
                .map(|(metric, fields)| (metric.clone(), fields.clone())),
        );
        Self { aliases }
    }

    /// Alias list for a metric, borrowed when the id is registered.
    #[must_use]
    pub fn possible_fields(&self, metric_id: &str) -> Cow<'_, [String]> {
        match self.aliases.get(metric_id) {
            Some(fields) => Cow::Borrowed(fields.as_slice()),
            None => Cow::Owned(vec![metric_id.to_string()]),
        }
    }

    /// Alias list for a metric as an owned vector.
    #[must_use]
    pub fn get_possible_fields(&self, metric_id: &str) -> Vec<String> {
        self.possible_fields(metric_id).into_owned()
    }

    /// Check if a metric id has a configured entry.
    #[must_use]
    pub fn contains(&self, metric_id: &str) -> bool {
        self.aliases.contains_key(metric_id)
    }

    /// Registered metric ids in sorted order.
    pub fn metric_ids(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    /// Registered entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.aliases
            .iter()
            .map(|(metric, fields)| (metric.as_str(), fields.as_slice()))
    }

    /// Number of registered metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Check if no metrics are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn validate_entry(metric: &str, fields: &[String]) -> Result<(), RegistryError> {
    if metric.is_empty() {
        return Err(RegistryError::EmptyMetricId);
    }
    if fields.is_empty() {
        return Err(RegistryError::EmptyAliasList(metric.to_string()));
    }
    if fields.iter().any(String::is_empty) {
        return Err(RegistryError::EmptyAlias(metric.to_string()));
    }
    Ok(())
}

impl TryFrom<BTreeMap<String, Vec<String>>> for MetricFieldRegistry {
    type Error = RegistryError;

    fn try_from(aliases: BTreeMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        Self::from_entries(aliases)
    }
}

impl From<MetricFieldRegistry> for BTreeMap<String, Vec<String>> {
    fn from(registry: MetricFieldRegistry) -> Self {
        registry.aliases
    }
}

/// Alias list for a metric from the built-in registry.
#[must_use]
pub fn get_possible_fields(metric_id: &str) -> Vec<String> {
    MetricFieldRegistry::default_registry().get_possible_fields(metric_id)
}
