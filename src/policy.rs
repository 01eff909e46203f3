//! Parking policy.
//!
//! The policy is loaded once at startup from the configuration file and mutated at
//! runtime only by operator commands (toggle on/off, cycle mode). It is passed
//! explicitly into the evaluator and the command handler, there is no ambient global.

use std::fmt;

/// Default ground speed limit for low speed mode, in m/s.
pub const DEFAULT_SPEED_LIMIT: f64 = 0.1;

/// Automatic parking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkMode {
    /// Park only once the ground speed drops below the configured limit.
    LowSpeed,
    /// Park as soon as the vessel touches the ground, regardless of speed.
    Glue,
}

/// Number of defined parking modes.
const MODE_COUNT: i64 = 2;

impl ParkMode {
    /// Advances to the next mode, wrapping after the last one.
    #[must_use]
    pub fn cycle(self) -> ParkMode {
        match self {
            ParkMode::LowSpeed => ParkMode::Glue,
            ParkMode::Glue => ParkMode::LowSpeed,
        }
    }

    /// Gets the mode for a raw configuration index, taken modulo the number of modes.
    #[must_use]
    pub fn from_index(index: i64) -> ParkMode {
        match index.rem_euclid(MODE_COUNT) {
            0 => ParkMode::LowSpeed,
            _ => ParkMode::Glue,
        }
    }
}

impl fmt::Display for ParkMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                ParkMode::LowSpeed => "low speed",
                ParkMode::Glue => "contact",
            }
        )
    }
}

/// Runtime parking policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    /// Whether automatic parking is enabled.
    pub enabled: bool,
    /// Condition under which a grounded vessel is parked.
    pub mode: ParkMode,
    /// Ground speed limit for [`ParkMode::LowSpeed`](enum.ParkMode.html), in m/s.
    pub speed_limit: f64,
}

impl Policy {
    /// Toggles automatic parking on or off.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Cycles to the next parking mode.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.cycle();
    }
}

impl Default for Policy {
    fn default() -> Policy {
        Policy {
            enabled: true,
            mode: ParkMode::LowSpeed,
            speed_limit: DEFAULT_SPEED_LIMIT,
        }
    }
}
