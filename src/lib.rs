//! Parking brake software for simulated vessels.
//!
//! This crate decides, once per simulation step, whether a vessel that has physically
//! touched down on a surface should be frozen in a fully immobilized landed state. It
//! provides two cooperating pieces:
//!
//! * an automatic evaluator that scans every live vessel each tick and parks the ones
//!   that rest on the ground with no active thrusters, according to the configured
//!   [`policy`](policy/index.html), and
//! * a manual "park now" command with a timed two-step confirmation, so that a single
//!   stray key press cannot immobilize a vessel that is still airborne.
//!
//! The crate never talks to a concrete simulator directly. It only depends on the
//! narrow capability traits in the [`host`](host/index.html) module, which a thin
//! adapter implements on top of the real host API. An in-memory implementation for
//! tests and the demo launcher lives in [`sim`](sim/index.html).
//!
//! ## Configuration
//!
//! Startup defaults are read once from `config.toml`. Missing or unreadable values are
//! not fatal: each one falls back to a compiled-in default and logs a diagnostic.
//! Please refer to the [`config`](config/index.html) module for further information.
//!
//! ## Launcher
//!
//! The project has a launcher in `src/main.rs` that runs a small scripted simulation,
//! useful to watch the engine make its decisions without a real host attached.

#![deny(clippy::all)]
#![forbid(anonymous_parameters)]
#![warn(clippy::pedantic)]
#![deny(
    variant_size_differences,
    unused_results,
    unused_qualifications,
    unused_import_braces,
    unsafe_code,
    trivial_numeric_casts,
    trivial_casts,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    unused_extern_crates
)]
#![allow(clippy::use_self)]

/// Configuration file.
pub const CONFIG_FILE: &str = "config.toml";

pub mod autopark;
pub mod brake;
pub mod config;
pub mod confirm;
pub mod error;
pub mod host;
pub mod policy;
pub mod sim;

use anyhow::Error;
use tracing::info;

pub use crate::brake::{Command, ParkingBrake};
pub use crate::policy::{ParkMode, Policy};

use crate::host::{Host, Vessel};

/// The main logic of the demo launcher.
///
/// Loads the startup policy from [`CONFIG_FILE`](constant.CONFIG_FILE.html) and runs a
/// short scripted scenario: a vessel touches down with some residual ground speed and
/// rolls out until the automatic evaluator decides to park it.
pub fn run() -> Result<(), Error> {
    let policy = config::load_policy(CONFIG_FILE);
    let mut brake = ParkingBrake::new(policy);

    let mut host = sim::SimHost::new();
    let rover = sim::SimVessel::new("Demo rover");
    rover.set_ground_contact(true);
    rover.set_ground_speed(2.0);
    host.add_vessel(rover);

    for _ in 0..60 {
        host.advance(0.1, 0.1);
        let target = host.vessel(0);

        // Roll-out: bleed off ground speed until the brake takes over.
        if !target.flight_status().is_landed() {
            target.set_ground_speed((target.ground_speed() - 0.05).max(0.0));
        }

        brake.pre_step(&host);
    }

    let target = host.vessel(0);
    for line in brake.render(target, host.now()) {
        info!("{line}");
    }

    Ok(())
}

/// Initializes the logger.
pub fn init_logger() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
