//! # CLI Command Implementations
//!
//! Each command returns the text to print so it can be exercised directly
//! from tests.

use crate::error::Result;
use crate::records::load_records;
use metricfield_core::{MetricFieldRegistry, MetricValueResolver, MissingPolicy, Scorecard};
use std::fmt::Write as _;
use std::path::Path;

/// Render an optional number the way report pages show it.
fn display_value(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

fn to_pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

// =============================================================================
// FIELDS COMMAND
// =============================================================================

/// Show the alias list for a metric.
pub fn cmd_fields(registry: &MetricFieldRegistry, json_mode: bool, metric: &str) -> String {
    let fields = registry.get_possible_fields(metric);

    if json_mode {
        return to_pretty(&serde_json::json!({
            "metric": metric,
            "registered": registry.contains(metric),
            "fields": fields,
        }));
    }

    if !registry.contains(metric) {
        tracing::warn!("Metric '{}' is not registered; it reads only its own field", metric);
    }
    fields.join(", ")
}

// =============================================================================
// METRICS COMMAND
// =============================================================================

/// List registered metrics and their aliases.
pub fn cmd_metrics(registry: &MetricFieldRegistry, json_mode: bool) -> Result<String> {
    if json_mode {
        return Ok(to_pretty(&serde_json::to_value(registry)?));
    }

    let width = registry.metric_ids().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (metric, fields) in registry.iter() {
        let _ = writeln!(out, "{metric:<width$}  {}", fields.join(", "));
    }
    Ok(out.trim_end().to_string())
}

// =============================================================================
// RESOLVE COMMAND
// =============================================================================

/// Resolve one metric for every record in a file.
pub fn cmd_resolve(
    registry: &MetricFieldRegistry,
    json_mode: bool,
    file: &Path,
    metric: &str,
    policy: MissingPolicy,
) -> Result<String> {
    let records = load_records(file)?;
    let resolver = MetricValueResolver::new(registry);

    tracing::info!(
        "Resolving '{}' for {} record(s) (policy: {:?})",
        metric,
        records.len(),
        policy
    );

    let resolutions: Vec<_> = records
        .iter()
        .map(|record| resolver.resolve_traced(record, metric, policy))
        .collect();

    for (index, resolution) in resolutions.iter().enumerate() {
        tracing::debug!(
            "record {}: {} via {:?}",
            index,
            display_value(resolution.value),
            resolution.matched_field
        );
    }

    if json_mode {
        return Ok(to_pretty(&serde_json::json!({
            "metric": metric,
            "fields": resolver.get_possible_fields(metric),
            "results": resolutions,
        })));
    }

    let mut out = String::new();
    for (index, resolution) in resolutions.iter().enumerate() {
        let source = resolution.matched_field.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "{index}\t{}\t{source}",
            display_value(resolution.value)
        );
    }
    Ok(out.trim_end().to_string())
}

// =============================================================================
// SCORECARD COMMAND
// =============================================================================

/// Resolve every registered metric for every record in a file.
pub fn cmd_scorecard(
    registry: &MetricFieldRegistry,
    json_mode: bool,
    file: &Path,
    policy: MissingPolicy,
) -> Result<String> {
    let records = load_records(file)?;
    let resolver = MetricValueResolver::new(registry);

    let cards: Vec<Scorecard> = records
        .iter()
        .map(|record| Scorecard::for_entity(&resolver, record, policy))
        .collect();

    if json_mode {
        return Ok(to_pretty(&serde_json::to_value(&cards)?));
    }

    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        let _ = writeln!(out, "record {index}");
        for (metric, value) in card.iter() {
            let _ = writeln!(out, "  {metric}: {}", display_value(value));
        }
    }
    Ok(out.trim_end().to_string())
}
