//! Parking brake launcher.
//!
//! Initializes the logger, loads the configuration and runs the demo simulation in
//! [`park_brake::run()`](../park_brake/fn.run.html): a scripted vessel touches down,
//! rolls out, and gets parked by the automatic evaluator. Attach the library to a real
//! host through the [`host`](../park_brake/host/index.html) traits for actual use.

#![deny(clippy::all)]
#![forbid(anonymous_parameters)]
#![warn(clippy::pedantic)]

use colored::Colorize;
use tracing::info;

/// Program entry point.
fn main() {
    if let Err(e) = park_brake::init_logger() {
        eprintln!("{} {e}", "Error initializing the logger:".red().bold());
        std::process::exit(1);
    }

    info!("Parking Brake {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = park_brake::run() {
        print_failure(&e, "Error running the parking brake demo");
        std::process::exit(1);
    }
}

/// Prints an error and its cause chain to the standard error output.
fn print_failure(error: &anyhow::Error, main_error: &str) {
    eprintln!("{}", format!("{main_error}:").red().bold());

    for cause in error.chain() {
        eprintln!("\tcaused by: {cause}");
    }
}
