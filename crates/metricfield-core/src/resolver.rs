//! # Metric Value Resolver
//!
//! Reads a numeric metric off a record whose field names may have drifted
//! across schema versions.
//!
//! ## Algorithm
//!
//! 1. Ask the registry for the metric's alias list.
//! 2. Walk the aliases in priority order; the first one holding a usable
//!    number wins (a stored `0` counts as usable).
//! 3. If none does, apply the caller's `MissingPolicy`.
//!
//! Resolution never fails and never mutates the record.

use crate::coerce::coerce;
use crate::registry::MetricFieldRegistry;
use crate::types::{FieldSource, MissingPolicy};
use serde::{Deserialize, Serialize};

/// Outcome of a traced resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// The resolved number, or `None` when unresolved under `MissingPolicy::Null`.
    pub value: Option<f64>,
    /// The alias the value was read from; `None` when a fallback was used.
    pub matched_field: Option<String>,
}

/// Resolves metric values against a registry.
///
/// Holds only a shared borrow of the registry, so it is `Copy` and can be
/// used from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct MetricValueResolver<'r> {
    registry: &'r MetricFieldRegistry,
}

impl Default for MetricValueResolver<'static> {
    fn default() -> Self {
        Self::new(MetricFieldRegistry::default_registry())
    }
}

impl<'r> MetricValueResolver<'r> {
    /// Create a resolver over the given registry.
    #[must_use]
    pub const fn new(registry: &'r MetricFieldRegistry) -> Self {
        Self { registry }
    }

    /// The registry this resolver reads aliases from.
    #[must_use]
    pub const fn registry(&self) -> &'r MetricFieldRegistry {
        self.registry
    }

    /// Alias list for a metric, in priority order.
    #[must_use]
    pub fn get_possible_fields(&self, metric_id: &str) -> Vec<String> {
        self.registry.get_possible_fields(metric_id)
    }

    /// Resolve a metric value for an entity.
    ///
    /// Under `MissingPolicy::Zero` the result is always `Some` finite number.
    /// Under `MissingPolicy::Null` it is `None` when no alias is usable.
    #[must_use]
    pub fn resolve<E: FieldSource + ?Sized>(
        &self,
        entity: &E,
        metric_id: &str,
        policy: MissingPolicy,
    ) -> Option<f64> {
        self.resolve_traced(entity, metric_id, policy).value
    }

    /// Resolve with `MissingPolicy::Zero`.
    #[must_use]
    pub fn resolve_or_zero<E: FieldSource + ?Sized>(&self, entity: &E, metric_id: &str) -> f64 {
        self.resolve(entity, metric_id, MissingPolicy::Zero)
            .unwrap_or_default()
    }

    /// Resolve with `MissingPolicy::Null`.
    #[must_use]
    pub fn resolve_or_null<E: FieldSource + ?Sized>(
        &self,
        entity: &E,
        metric_id: &str,
    ) -> Option<f64> {
        self.resolve(entity, metric_id, MissingPolicy::Null)
    }

    /// Resolve and report which alias supplied the value.
    #[must_use]
    pub fn resolve_traced<E: FieldSource + ?Sized>(
        &self,
        entity: &E,
        metric_id: &str,
        policy: MissingPolicy,
    ) -> Resolution {
        let fields = self.registry.possible_fields(metric_id);

        for field in fields.iter() {
            if let Some(value) = entity.field(field).and_then(|raw| coerce(raw).value()) {
                return Resolution {
                    value: Some(value),
                    matched_field: Some(field.clone()),
                };
            }
        }

        let value = match policy {
            MissingPolicy::Null => None,
            // Only reachable when the primary field is unusable, so this
            // currently always lands on zero.
            MissingPolicy::Zero => Some(
                fields
                    .first()
                    .and_then(|field| entity.field(field))
                    .and_then(|raw| coerce(raw).value())
                    .unwrap_or(0.0),
            ),
        };

        Resolution {
            value,
            matched_field: None,
        }
    }
}

/// Resolve a metric against the built-in registry.
#[must_use]
pub fn resolve<E: FieldSource + ?Sized>(
    entity: &E,
    metric_id: &str,
    policy: MissingPolicy,
) -> Option<f64> {
    MetricValueResolver::default().resolve(entity, metric_id, policy)
}
