//! # Built-in Alias Table
//!
//! Canonical metric ids and the legacy field names each one has been stored
//! under. These are compiled into the binary and immutable at runtime.
//!
//! ## Priority
//!
//! Each alias list is in priority order, most canonical first. The resolver
//! returns the first alias holding a usable number.
//!
//! ## Asymmetry
//!
//! The table is only partially symmetric: `brand`/`trust` and
//! `aesthetics`/`appearance` alias each other, but `value` has no reverse
//! alias and `convenience` maps only to itself. Each list is per-metric
//! configuration and is kept exactly as recorded. Metrics with no recorded
//! legacy names read only their own field.

/// Canonical id for perceived value for money.
pub const VALUE: &str = "value";
/// Canonical id for visual appearance.
pub const APPEARANCE: &str = "appearance";
/// Canonical id for aesthetics (older name of appearance).
pub const AESTHETICS: &str = "aesthetics";
/// Canonical id for brand perception.
pub const BRAND: &str = "brand";
/// Canonical id for purchase confidence.
pub const CONFIDENCE: &str = "confidence";
/// Canonical id for convenience.
pub const CONVENIENCE: &str = "convenience";
/// Canonical id for utility.
pub const UTILITY: &str = "utility";
/// Canonical id for appetizing (food products).
pub const APPETIZING: &str = "appetizing";
/// Canonical id for target audience fit.
pub const TARGET_AUDIENCE: &str = "target_audience";
/// Canonical id for novelty.
pub const NOVELTY: &str = "novelty";
/// Canonical id for trust.
pub const TRUST: &str = "trust";

/// The built-in registry: `(metric id, aliases in priority order)`.
pub const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    (VALUE, &[VALUE]),
    (APPEARANCE, &[APPEARANCE, AESTHETICS]),
    (AESTHETICS, &[AESTHETICS, APPEARANCE]),
    (BRAND, &[BRAND, TRUST]),
    (CONFIDENCE, &[CONFIDENCE]),
    (CONVENIENCE, &[CONVENIENCE]),
    (UTILITY, &[UTILITY]),
    (APPETIZING, &[APPETIZING]),
    (TARGET_AUDIENCE, &[TARGET_AUDIENCE]),
    (NOVELTY, &[NOVELTY, UTILITY]),
    (TRUST, &[TRUST, BRAND]),
];
