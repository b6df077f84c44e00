//! largest - Find the Largest Files in a Directory Tree
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use largest::config::{CliArgs, ScanConfig};
use largest::output::ResultFormatter;
use largest::progress::print_summary;
use largest::scan::ScanCoordinator;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::sync::atomic::Ordering;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments (-h prints usage and exits 0 here)
    let args = CliArgs::parse();

    setup_logging(args.verbose)?;

    let config = ScanConfig::from_args(args).context("Invalid configuration")?;
    let verbose = config.verbose;

    let coordinator = ScanCoordinator::new(config);

    // Setup signal handler for graceful shutdown
    let shutdown_flag = coordinator.shutdown_flag();
    ctrlc::set_handler(move || {
        shutdown_flag.store(true, Ordering::SeqCst);
    })
    .context("Failed to set signal handler")?;

    let report = coordinator.run().context("Scan failed")?;

    let formatter = ResultFormatter::new(coordinator.config(), &report.root);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    formatter
        .write_all(&mut out, &report.records)
        .context("Failed to write results")?;

    if verbose {
        print_summary(&report.stats);
    }

    if !report.stats.completed {
        info!("Scan was interrupted before completion");
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("largest=debug,warn"),
        Err(_) => EnvFilter::new("largest=warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
