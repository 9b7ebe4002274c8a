//! # Core Type Definitions
//!
//! This module contains the record-side types the resolver reads from:
//! - Raw field values (`FieldValue`)
//! - Records (`Entity`) and the `FieldSource` lookup trait
//! - The missing-data policy (`MissingPolicy`)
//! - Error types (`RegistryError`)
//!
//! ## Read-Only Guarantees
//!
//! Nothing in this module mutates a record on behalf of the resolver.
//! Records are borrowed for the duration of a lookup and never retained.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

// =============================================================================
// FIELD VALUE
// =============================================================================

/// A raw value stored under one field of a record.
///
/// Records coming from different schema versions are loosely typed: the same
/// score may be stored as a number, as a numeric-looking string, or as an
/// explicit null. A field that is absent altogether is represented by the
/// field not being present in the record, never by a variant here.
///
/// Only `Serialize` is derived. Loaders build values explicitly so that an
/// unrepresentable number in the input can still land as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null.
    Null,
    /// A number as stored. May be non-finite; coercion rejects those.
    Number(f64),
    /// Free text, usually a number written as a string.
    Text(String),
}

impl FieldValue {
    /// Create a text value.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Check if the value is an explicit null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// =============================================================================
// FIELD SOURCE
// =============================================================================

/// Read access to the fields of a record.
///
/// The resolver only ever asks for a field by its exact name. Any keyed
/// container can be resolved against by implementing this trait.
pub trait FieldSource {
    /// Look up a field by exact name. `None` means the field is absent.
    fn field(&self, name: &str) -> Option<&FieldValue>;
}

impl<S: FieldSource + ?Sized> FieldSource for &S {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        (**self).field(name)
    }
}

impl FieldSource for BTreeMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

impl<S: std::hash::BuildHasher> FieldSource for HashMap<String, FieldValue, S> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

// =============================================================================
// ENTITY
// =============================================================================

/// One survey answer set, competitor listing, or variant score sheet.
///
/// Uses BTreeMap so that serialized records have a stable field order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Entity(BTreeMap<String, FieldValue>);

impl Entity {
    /// Create a new empty entity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the entity has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FieldSource for Entity {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }
}

impl From<BTreeMap<String, FieldValue>> for Entity {
    fn from(fields: BTreeMap<String, FieldValue>) -> Self {
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Entity {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// =============================================================================
// MISSING POLICY
// =============================================================================

/// What to return when no alias of a metric holds a usable number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Fall back to the first alias, and to `0` if that is unusable too.
    #[default]
    Zero,
    /// Report the metric as unresolved (`None`).
    Null,
}

impl MissingPolicy {
    /// Map the boolean "return null" flag used by report callers.
    #[must_use]
    pub const fn from_return_null(return_null: bool) -> Self {
        if return_null { Self::Null } else { Self::Zero }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while building a registry.
///
/// Lookups and resolution never fail; only registry construction from
/// configuration can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A registry entry has an empty metric id.
    #[error("Metric id must not be empty")]
    EmptyMetricId,

    /// A metric was configured with no aliases.
    #[error("Metric '{0}' has an empty alias list")]
    EmptyAliasList(String),

    /// A metric's alias list contains an empty field name.
    #[error("Metric '{0}' has an empty alias")]
    EmptyAlias(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_builder_and_lookup() {
        let entity = Entity::new().with("value", 3.0).with("brand", "4");

        assert_eq!(entity.len(), 2);
        assert_eq!(entity.field("value"), Some(&FieldValue::Number(3.0)));
        assert_eq!(entity.field("brand"), Some(&FieldValue::text("4")));
        assert_eq!(entity.field("trust"), None);
    }

    #[test]
    fn option_none_becomes_null() {
        let entity = Entity::new().with("trust", None::<f64>);
        assert!(entity.field("trust").is_some_and(FieldValue::is_null));
    }

    #[test]
    fn entity_serializes_as_plain_object() {
        let entity = Entity::new()
            .with("value", 2.0)
            .with("trust", "3.5")
            .with("brand", FieldValue::Null);

        let json = serde_json::to_string(&entity).expect("serialize");
        assert_eq!(json, r#"{"brand":null,"trust":"3.5","value":2.0}"#);
    }

    #[test]
    fn hashmap_is_a_field_source() {
        let mut fields = HashMap::new();
        fields.insert("utility".to_string(), FieldValue::Number(1.0));
        assert_eq!(fields.field("utility"), Some(&FieldValue::Number(1.0)));
    }

    #[test]
    fn missing_policy_from_flag() {
        assert_eq!(MissingPolicy::from_return_null(true), MissingPolicy::Null);
        assert_eq!(MissingPolicy::from_return_null(false), MissingPolicy::Zero);
        assert_eq!(MissingPolicy::default(), MissingPolicy::Zero);
    }
}
