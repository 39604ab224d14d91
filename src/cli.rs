//! CLI definitions

use clap::{Parser, Subcommand};

/// hooktrack - webhook capture for integration testing
#[derive(Parser, Debug)]
#[command(
    name = "hooktrack",
    version,
    about = "Define a REST endpoint and track the requests made to it",
    long_about = "Define a virtual HTTP endpoint with a canned response.\n\n\
                  Every request made to the endpoint's URL is recorded and can\n\
                  be fetched back as an ordered log for inspection."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the capture server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        /// Address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,

        /// How long captured endpoints and requests are retained, in seconds
        #[arg(long, default_value_t = 3600)]
        retention_secs: u64,
    },
}
