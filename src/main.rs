//! hooktrack - define a virtual HTTP endpoint with a canned response and
//! track every request made to it

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::sync::Arc;

use clap::Parser;

use hooktrack::cli::{Cli, Command};
use hooktrack::server;
use hooktrack::storage::MemoryStore;

/// Main entry point for the hooktrack CLI
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Serve {
            port,
            bind,
            retention_secs,
        } => {
            let store = Arc::new(MemoryStore::new(retention_secs));
            server::serve(&format!("{bind}:{port}"), store)
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Initialize `env_logger`, honoring `RUST_LOG` when set
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
