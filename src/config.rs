//! Configuration module.
//!
//! The startup configuration is a small TOML table:
//!
//! ```toml
//! auto_park = true
//! park_mode = 0
//! speed_limit = 0.1
//! ```
//!
//! Every key is optional. A missing or unreadable key is not an error: it falls back
//! to its compiled-in default and emits one diagnostic log line. The file is read once
//! at startup and never written back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Error};
use serde::Deserialize;
use tracing::warn;

use crate::error;
use crate::policy::{ParkMode, Policy};

/// Raw configuration table, as persisted in the configuration file.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Config {
    /// Whether automatic parking starts enabled.
    auto_park: Option<bool>,
    /// Parking mode index, taken modulo the number of defined modes.
    park_mode: Option<i64>,
    /// Ground speed limit for low speed mode, in m/s.
    speed_limit: Option<f64>,
}

impl Config {
    /// Creates a new configuration object from a path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, Error> {
        let contents = fs::read_to_string(path.as_ref()).context(error::Config::Read {
            path: path.as_ref().to_owned(),
        })?;

        toml::from_str(&contents).context(error::Config::InvalidToml {
            path: path.as_ref().to_owned(),
        })
    }

    /// Builds the startup policy, falling back to compiled-in defaults for missing keys.
    pub fn into_policy(self) -> Policy {
        let default = Policy::default();

        let enabled = self.auto_park.unwrap_or_else(|| {
            warn!("could not read the AutoPark setting, using the default");
            default.enabled
        });
        let mode = self.park_mode.map_or_else(
            || {
                warn!("could not read the ParkMode setting, using the default");
                default.mode
            },
            ParkMode::from_index,
        );
        let speed_limit = self.speed_limit.unwrap_or_else(|| {
            warn!("could not read the SpeedLimit setting, using the default");
            default.speed_limit
        });
        let speed_limit = if speed_limit >= 0.0 {
            speed_limit
        } else {
            warn!("the SpeedLimit setting must not be negative, using the default");
            default.speed_limit
        };

        Policy {
            enabled,
            mode,
            speed_limit,
        }
    }
}

/// Loads the startup policy from the configuration file at `path`.
///
/// An unreadable or invalid file yields the compiled-in defaults with one diagnostic,
/// it is never fatal.
pub fn load_policy<P: AsRef<Path>>(path: P) -> Policy {
    match Config::from_file(path) {
        Ok(config) => config.into_policy(),
        Err(e) => {
            warn!("{e:#}, using the default policy");
            Policy::default()
        }
    }
}
