//! Token Top-Up Report CLI
//!
//! Command-line interface for topping up member balances and writing the
//! email notification report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- -c companies.json -u users.json
//! cargo run -- -c companies.json -u users.json -o report.txt
//! cargo run -- -c companies.json -u users.json -o -
//! RUST_LOG=debug cargo run -- -c companies.json -u users.json -o -
//! ```
//!
//! The report goes to `output.txt` unless `--output` says otherwise. An
//! existing output file is never overwritten. Warnings and diagnostics go to
//! stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing input, existing output, malformed or invalid records,
//!   duplicate company, orphaned user)

use std::process;
use token_topup_report::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // RUST_LOG wins over --log-level
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = args.to_job().execute() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
