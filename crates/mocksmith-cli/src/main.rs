//! mocksmith: Command-line tool for generating gMock classes from C++ headers.
//!
//! Scans one header for class and struct declarations with pure virtual
//! methods and prints a mock class block for each to standard output.
//! A header without any such class produces no output and still succeeds.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mocksmith::{generate, parse_header};

/// Generate gMock mock classes for the pure virtual interfaces in a C++ header
#[derive(Parser)]
#[command(name = "mocksmith")]
#[command(version, about, long_about = None)]
struct Cli {
    /// C++ header file to scan
    header: PathBuf,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (tree, source) = parse_header(&cli.header)
        .with_context(|| format!("Failed to process {}", cli.header.display()))?;

    print!("{}", generate(tree.root_node(), &source));

    Ok(())
}
