//! # metricfield
//!
//! Resolve canonical survey metrics from JSON records whose field names
//! drifted across schema versions.
//!
//! ## Usage
//!
//! ```bash
//! # Inspect the alias chain of a metric
//! metricfield fields appearance
//!
//! # Resolve one metric per record, null when unresolved
//! metricfield resolve -f responses.json -m novelty --null
//!
//! # Every metric for every record, with site-specific aliases
//! metricfield -R aliases.toml --json-mode scorecard -f competitors.json
//! ```

use clap::Parser;
use metricfield::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(&cli);

    match cli::execute(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize tracing on stderr. METRICFIELD_LOG_FORMAT=json enables
/// machine-parseable output; RUST_LOG overrides the level flags.
fn init_tracing(cli: &cli::Cli) {
    let log_format =
        std::env::var("METRICFIELD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.quiet {
        "metricfield=warn"
    } else if cli.verbose {
        "metricfield=debug"
    } else {
        "metricfield=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
