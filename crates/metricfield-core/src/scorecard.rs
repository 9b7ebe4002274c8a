//! # Scorecard
//!
//! Every registered metric of one record, resolved in one pass.
//! Report and aggregation code reads whole score sheets rather than
//! single metrics.

use crate::resolver::MetricValueResolver;
use crate::types::{FieldSource, MissingPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved values keyed by canonical metric id, in sorted order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scorecard {
    scores: BTreeMap<String, Option<f64>>,
}

impl Scorecard {
    /// Resolve every metric the resolver's registry knows about.
    #[must_use]
    pub fn for_entity<E: FieldSource + ?Sized>(
        resolver: &MetricValueResolver<'_>,
        entity: &E,
        policy: MissingPolicy,
    ) -> Self {
        let scores = resolver
            .registry()
            .metric_ids()
            .map(|metric| {
                (
                    metric.to_string(),
                    resolver.resolve(entity, metric, policy),
                )
            })
            .collect();
        Self { scores }
    }

    /// Resolved value for one metric. The outer `None` means the metric is
    /// not part of this scorecard.
    #[must_use]
    pub fn get(&self, metric_id: &str) -> Option<Option<f64>> {
        self.scores.get(metric_id).copied()
    }

    /// Iterate `(metric id, value)` in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of metrics resolved.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the scorecard is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MetricFieldRegistry;
    use crate::types::Entity;

    #[test]
    fn covers_every_registered_metric() {
        let resolver = MetricValueResolver::default();
        let entity = Entity::new().with("aesthetics", 4.0).with("brand", "3");
        let card = Scorecard::for_entity(&resolver, &entity, MissingPolicy::Null);

        assert_eq!(card.len(), MetricFieldRegistry::builtin().len());
        assert_eq!(card.get("appearance"), Some(Some(4.0)));
        assert_eq!(card.get("aesthetics"), Some(Some(4.0)));
        assert_eq!(card.get("trust"), Some(Some(3.0)));
        assert_eq!(card.get("appetizing"), Some(None));
        assert_eq!(card.get("confidence"), Some(None));
        assert_eq!(card.get("value"), Some(None));
        assert_eq!(card.get("delight"), None);
    }

    #[test]
    fn zero_policy_fills_every_slot() {
        let resolver = MetricValueResolver::default();
        let card = Scorecard::for_entity(&resolver, &Entity::new(), MissingPolicy::Zero);
        assert!(card.iter().all(|(_, v)| v == Some(0.0)));
    }

    #[test]
    fn serializes_as_object() {
        let registry =
            MetricFieldRegistry::from_entries([("trust", vec!["trust"]), ("value", vec!["value"])])
                .expect("valid entries");
        let resolver = MetricValueResolver::new(&registry);
        let entity = Entity::new().with("trust", 2.5);
        let card = Scorecard::for_entity(&resolver, &entity, MissingPolicy::Null);

        let json = serde_json::to_string(&card).expect("serialize");
        assert_eq!(json, r#"{"trust":2.5,"value":null}"#);
    }
}
