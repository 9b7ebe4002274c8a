//! # Record Loading
//!
//! Turns a JSON records file into entities. A file holds either one JSON
//! object or an array of objects.
//!
//! Field values are converted without judgement: numbers, strings and nulls
//! map directly, anything else becomes its JSON text so it simply fails
//! coercion later instead of rejecting the whole record.

use crate::error::{CliError, Result};
use metricfield_core::{Entity, FieldValue};
use serde_json::Value;
use std::path::Path;

/// Maximum records file size (100 MB).
const MAX_RECORDS_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Convert one JSON value into a raw field value.
#[must_use]
pub fn field_value(value: &Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        // Digits that do not fit an f64 stay as text and fail coercion.
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| FieldValue::Text(n.to_string()), FieldValue::Number),
        Value::String(s) => FieldValue::Text(s.clone()),
        other => FieldValue::Text(other.to_string()),
    }
}

/// Convert a JSON object into an entity.
#[must_use]
pub fn entity_from_object(object: &serde_json::Map<String, Value>) -> Entity {
    object
        .iter()
        .map(|(name, value)| (name.clone(), field_value(value)))
        .collect()
}

/// Parse records from JSON text.
pub fn parse_records(text: &str) -> Result<Vec<Entity>> {
    let json: Value = serde_json::from_str(text)?;
    match json {
        Value::Object(object) => Ok(vec![entity_from_object(&object)]),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(object) => Ok(entity_from_object(object)),
                _ => Err(CliError::InvalidInput(format!(
                    "record {index} is not a JSON object"
                ))),
            })
            .collect(),
        _ => Err(CliError::InvalidInput(
            "expected a JSON object or an array of objects".to_string(),
        )),
    }
}

/// Read and parse a records file.
pub fn load_records(path: &Path) -> Result<Vec<Entity>> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_RECORDS_FILE_SIZE {
        return Err(CliError::InvalidInput(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_RECORDS_FILE_SIZE
        )));
    }

    let text = std::fs::read_to_string(path)?;
    let records = parse_records(&text)?;
    tracing::debug!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metricfield_core::{FieldSource, MissingPolicy, coerce, resolve};

    #[test]
    fn single_object_is_one_record() {
        let records = parse_records(r#"{"value": 3}"#).expect("parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("value"), Some(&FieldValue::Number(3.0)));
    }

    #[test]
    fn array_of_objects() {
        let records = parse_records(r#"[{"trust": "4"}, {"brand": null}]"#).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field("trust"), Some(&FieldValue::text("4")));
        assert_eq!(records[1].field("brand"), Some(&FieldValue::Null));
    }

    #[test]
    fn odd_values_become_text() {
        let records = parse_records(r#"{"value": true, "trust": [1]}"#).expect("parse");
        assert_eq!(records[0].field("value"), Some(&FieldValue::text("true")));
        assert_eq!(records[0].field("trust"), Some(&FieldValue::text("[1]")));
    }

    #[test]
    fn out_of_range_number_keeps_the_batch() {
        let records = parse_records(r#"[{"value": 3}, {"value": 1e400, "trust": 2}]"#)
            .expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field("value"), Some(&FieldValue::Number(3.0)));
        assert_eq!(records[1].field("trust"), Some(&FieldValue::Number(2.0)));

        let raw = records[1].field("value").expect("field present");
        assert!(!coerce(raw).is_valid());
        assert_eq!(resolve(&records[1], "value", MissingPolicy::Null), None);
        assert_eq!(resolve(&records[1], "value", MissingPolicy::Zero), Some(0.0));
    }

    #[test]
    fn wrong_top_level_is_rejected() {
        assert!(matches!(
            parse_records("42"),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_records("[1, 2]"),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(parse_records("{"), Err(CliError::Json(_))));
    }
}
