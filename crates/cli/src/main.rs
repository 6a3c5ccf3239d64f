//! dk - WebDAV drive client CLI
//!
//! A command-line interface for checking, correcting and classifying file
//! names against the naming policy of a WebDAV drive server.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod exit_code;
mod output;

use commands::Cli;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let exit_code = commands::execute(cli);

    std::process::exit(exit_code.as_i32());
}
