//! # metricfield-core
//!
//! Metric field resolution for survey, competitor and variant records.
//!
//! Score fields have been renamed across schema versions (`aesthetics` became
//! `appearance`, `brand` and `trust` were used interchangeably, ...). This
//! crate maps each canonical metric id to the ordered list of field names it
//! may be stored under and reads the first usable number from a record.
//!
//! ## Constraints
//!
//! - Pure Rust: no async, no I/O, no logging
//! - The registry is immutable once built; the built-in one is process-wide
//! - Resolution never fails and never mutates the record
//! - A stored `0` is a value, not missing data
//!
//! ## Example
//!
//! ```
//! use metricfield_core::{Entity, MissingPolicy, resolve};
//!
//! let survey = Entity::new().with("aesthetics", 4.2);
//! assert_eq!(resolve(&survey, "appearance", MissingPolicy::Zero), Some(4.2));
//! assert_eq!(resolve(&survey, "novelty", MissingPolicy::Null), None);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod coerce;
pub mod primitives;
pub mod registry;
pub mod resolver;
pub mod scorecard;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{Entity, FieldSource, FieldValue, MissingPolicy, RegistryError};

// =============================================================================
// RE-EXPORTS: Resolution
// =============================================================================

pub use coerce::{Coerced, coerce};
pub use registry::{MetricFieldRegistry, get_possible_fields};
pub use resolver::{MetricValueResolver, Resolution, resolve};
pub use scorecard::Scorecard;
