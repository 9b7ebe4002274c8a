//! # Property-Based Tests
//!
//! Totality and priority invariants of metric resolution, checked with
//! proptest over arbitrary records and metric ids.

use metricfield_core::{
    Entity, FieldValue, MetricFieldRegistry, MetricValueResolver, MissingPolicy,
    get_possible_fields,
};
use proptest::collection::btree_map;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Field names drawn from the built-in aliases plus a few unregistered ones.
fn field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("value".to_string()),
        Just("appearance".to_string()),
        Just("aesthetics".to_string()),
        Just("brand".to_string()),
        Just("trust".to_string()),
        Just("confidence".to_string()),
        Just("convenience".to_string()),
        Just("utility".to_string()),
        Just("appetizing".to_string()),
        Just("target_audience".to_string()),
        Just("novelty".to_string()),
        "[a-z_]{1,12}",
    ]
}

/// Raw values of every shape a legacy record may hold.
fn field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Null),
        any::<f64>().prop_map(FieldValue::Number),
        Just(FieldValue::Number(f64::NAN)),
        Just(FieldValue::Number(0.0)),
        (-1000i32..1000).prop_map(|n| FieldValue::Text(n.to_string())),
        ".{0,8}".prop_map(FieldValue::Text),
    ]
}

fn entity() -> impl Strategy<Value = Entity> {
    btree_map(field_name(), field_value(), 0..8).prop_map(Entity::from)
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Zero policy always yields a finite number.
    #[test]
    fn zero_policy_is_total_and_finite(entity in entity(), metric in field_name()) {
        let resolver = MetricValueResolver::default();
        let value = resolver.resolve(&entity, &metric, MissingPolicy::Zero);
        prop_assert!(value.is_some_and(f64::is_finite));
    }

    /// Null policy yields a finite number or None, never NaN.
    #[test]
    fn null_policy_never_yields_nan(entity in entity(), metric in field_name()) {
        let resolver = MetricValueResolver::default();
        if let Some(value) = resolver.resolve(&entity, &metric, MissingPolicy::Null) {
            prop_assert!(value.is_finite());
        }
    }

    /// The two policies agree whenever the null policy resolves.
    #[test]
    fn policies_agree_when_resolved(entity in entity(), metric in field_name()) {
        let resolver = MetricValueResolver::default();
        let with_null = resolver.resolve(&entity, &metric, MissingPolicy::Null);
        let with_zero = resolver.resolve(&entity, &metric, MissingPolicy::Zero);
        match with_null {
            Some(value) => prop_assert_eq!(with_zero, Some(value)),
            None => prop_assert_eq!(with_zero, Some(0.0)),
        }
    }

    /// A valid number in the first alias always wins, whatever follows.
    #[test]
    fn primary_alias_short_circuits(
        entity in entity(),
        metric in field_name(),
        primary in -1000i32..1000
    ) {
        let fields = get_possible_fields(&metric);
        let mut entity = entity;
        entity.insert(fields[0].clone(), f64::from(primary));

        let resolver = MetricValueResolver::default();
        prop_assert_eq!(
            resolver.resolve(&entity, &metric, MissingPolicy::Null),
            Some(f64::from(primary))
        );
    }

    /// Resolution is referentially transparent.
    #[test]
    fn resolution_is_repeatable(entity in entity(), metric in field_name()) {
        let resolver = MetricValueResolver::default();
        let first = resolver.resolve_traced(&entity, &metric, MissingPolicy::Null);
        let second = resolver.resolve_traced(&entity, &metric, MissingPolicy::Null);
        prop_assert_eq!(first, second);
    }

    /// Unknown ids resolve to a list containing only themselves.
    #[test]
    fn unknown_ids_pass_through(metric in "[a-z]{1,6}_x") {
        let registry = MetricFieldRegistry::builtin();
        prop_assume!(!registry.contains(&metric));
        prop_assert_eq!(registry.get_possible_fields(&metric), vec![metric.clone()]);
    }
}
