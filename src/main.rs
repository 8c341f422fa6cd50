// Allow common clippy pedantic lints
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]

//! transcode-wire CLI
//!
//! Decodes captured transcoding service responses into typed JSON records

use clap::Parser;
use transcode_wire::cli::{Cli, Runner};
use transcode_wire::LogLevel;

fn main() {
    let cli = Cli::parse();

    let level = tracing::Level::from(if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    // Initialize logging on stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
