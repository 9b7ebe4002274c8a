//! # Coercion Module
//!
//! Total conversion of a raw `FieldValue` into a number.
//!
//! - Never fails: every input maps to `Valid` or `Invalid`
//! - `Invalid` is distinct from `Valid(0.0)`, so a stored zero is never
//!   mistaken for missing data
//! - Only finite numbers are valid

use crate::types::FieldValue;

/// Result of coercing one raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    /// A finite number.
    Valid(f64),
    /// Null, non-numeric text, or a non-finite number.
    Invalid,
}

impl Coerced {
    /// The number, if valid.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Valid(n) => Some(n),
            Self::Invalid => None,
        }
    }

    /// Check if coercion produced a usable number.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Coerce a raw field value into a number.
///
/// - `Number(n)`: valid iff finite
/// - `Null`: invalid
/// - `Text(s)`: surrounding whitespace is ignored; blank text is invalid;
///   otherwise parsed as a decimal float (sign, fraction, exponent allowed)
#[must_use]
pub fn coerce(raw: &FieldValue) -> Coerced {
    match raw {
        FieldValue::Null => Coerced::Invalid,
        FieldValue::Number(n) => finite(*n),
        FieldValue::Text(s) => parse_text(s),
    }
}

fn parse_text(s: &str) -> Coerced {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Coerced::Invalid;
    }
    trimmed.parse::<f64>().map_or(Coerced::Invalid, finite)
}

fn finite(n: f64) -> Coerced {
    if n.is_finite() {
        Coerced::Valid(n)
    } else {
        Coerced::Invalid
    }
}
