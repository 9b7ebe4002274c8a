//! # metricfield
//!
//! Library half of the metricfield binary: CLI definition, registry
//! configuration and record loading, exposed for integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod records;

pub use error::{CliError, Result};
