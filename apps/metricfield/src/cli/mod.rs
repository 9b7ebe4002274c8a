//! # metricfield CLI Module
//!
//! ## Available Commands
//!
//! - `fields` - Show the alias list for a metric
//! - `metrics` - List registered metrics and their aliases
//! - `resolve` - Resolve one metric for every record in a file
//! - `scorecard` - Resolve every metric for every record in a file

mod commands;

use crate::config::load_registry;
use crate::error::Result;
use clap::{Parser, Subcommand};
use metricfield_core::MissingPolicy;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// metricfield - resolve survey metrics across legacy field names
#[derive(Parser, Debug)]
#[command(name = "metricfield")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML file with alias overrides layered on the built-in registry
    #[arg(short = 'R', long, global = true)]
    pub registry: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the alias list for a metric
    Fields {
        /// Canonical metric id
        metric: String,
    },

    /// List registered metrics
    Metrics,

    /// Resolve one metric for each record in a file
    Resolve {
        /// Path to the records file (JSON object or array of objects)
        #[arg(short, long)]
        file: PathBuf,

        /// Canonical metric id
        #[arg(short, long)]
        metric: String,

        /// Report unresolved values as null instead of 0
        #[arg(long)]
        null: bool,
    },

    /// Resolve every registered metric for each record in a file
    Scorecard {
        /// Path to the records file (JSON object or array of objects)
        #[arg(short, long)]
        file: PathBuf,

        /// Report unresolved values as null instead of 0
        #[arg(long)]
        null: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments, returning the text to print.
pub fn execute(cli: Cli) -> Result<String> {
    let registry = load_registry(cli.registry.as_deref())?;
    let json_mode = cli.json_mode;

    if cli.verbose {
        tracing::info!("Using registry with {} metric(s)", registry.len());
    }

    match cli.command {
        Commands::Fields { metric } => Ok(cmd_fields(&registry, json_mode, &metric)),
        Commands::Metrics => cmd_metrics(&registry, json_mode),
        Commands::Resolve { file, metric, null } => cmd_resolve(
            &registry,
            json_mode,
            &file,
            &metric,
            MissingPolicy::from_return_null(null),
        ),
        Commands::Scorecard { file, null } => cmd_scorecard(
            &registry,
            json_mode,
            &file,
            MissingPolicy::from_return_null(null),
        ),
    }
}
