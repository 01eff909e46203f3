//! Error module.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration file errors.
///
/// All of these are recoverable: the affected values simply fall back to their
/// compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Config {
    /// Error reading configuration file.
    #[error("error reading the config file at {path}")]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
    },

    /// Invalid TOML in configuration file.
    #[error("invalid TOML in the config file at {path}")]
    InvalidToml {
        /// Path of the configuration file.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the display implementation of configuration errors.
    #[test]
    fn config_error_display() {
        let error = Config::Read {
            path: PathBuf::from("config.toml"),
        };
        assert_eq!(
            format!("{error}"),
            "error reading the config file at config.toml"
        );

        let error = Config::InvalidToml {
            path: PathBuf::from("config.toml"),
        };
        assert_eq!(
            format!("{error}"),
            "invalid TOML in the config file at config.toml"
        );
    }
}
