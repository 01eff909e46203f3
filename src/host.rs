//! Host simulation interface.
//!
//! The engine never calls a concrete simulator. It depends only on the narrow
//! capability traits in this module, which a thin adapter implements on top of the
//! real host API. The traits are deliberately read-mostly: the single mutation this
//! crate ever issues is [`Vessel::set_landed_state`](trait.Vessel.html).

/// Alignment sentinel for the landed state descriptor.
///
/// The host requires exactly this value to align the vessel's pre-defined touchdown
/// contact points with the surface. It is an opaque host constant, not a tunable.
pub const TOUCHDOWN_ALIGNMENT: f64 = 10.0;

/// Flight status reported by the host for a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    /// Free flying.
    Free,
    /// Landed, fully immobilized.
    Landed,
    /// Docked to another vessel, the assembly free flying.
    DockedFree,
    /// Docked to another vessel, the assembly landed.
    DockedLanded,
}

impl FlightStatus {
    /// Whether the vessel is already resting immobilized on the surface.
    #[must_use]
    pub fn is_landed(self) -> bool {
        matches!(self, FlightStatus::Landed | FlightStatus::DockedLanded)
    }

    /// Decodes the host's raw status integer.
    ///
    /// The host encodes the status as 0 (free), 1 (landed), 2 (docked free) or
    /// 3 (docked landed).
    #[must_use]
    pub fn from_raw(raw: u8) -> Option<FlightStatus> {
        match raw {
            0 => Some(FlightStatus::Free),
            1 => Some(FlightStatus::Landed),
            2 => Some(FlightStatus::DockedFree),
            3 => Some(FlightStatus::DockedLanded),
            _ => None,
        }
    }
}

/// Surface resting pose issued with the landing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandedPose {
    /// Surface longitude, in radians.
    pub longitude: f64,
    /// Surface latitude, in radians.
    pub latitude: f64,
    /// Surface heading, in radians.
    pub heading: f64,
    /// Touchdown point alignment sentinel, always
    /// [`TOUCHDOWN_ALIGNMENT`](constant.TOUCHDOWN_ALIGNMENT.html).
    pub alignment: f64,
}

impl LandedPose {
    /// Creates a pose at the given surface coordinates, carrying the alignment sentinel.
    #[must_use]
    pub fn new(longitude: f64, latitude: f64, heading: f64) -> LandedPose {
        LandedPose {
            longitude,
            latitude,
            heading,
            alignment: TOUCHDOWN_ALIGNMENT,
        }
    }
}

/// A vessel tracked by the host.
///
/// All queries reflect the current tick. Implementations are expected to be cheap,
/// the engine reads a fresh snapshot every tick and never caches.
pub trait Vessel {
    /// Gets a human-readable vessel name, for logging.
    fn name(&self) -> String;

    /// Gets the current flight status.
    fn flight_status(&self) -> FlightStatus;

    /// Gets whether the vessel's collision geometry currently touches the surface.
    fn ground_contact(&self) -> bool;

    /// Gets the current ground speed, in m/s.
    fn ground_speed(&self) -> f64;

    /// Iterates over the current thruster levels.
    ///
    /// Callers may stop consuming the iterator at the first non-zero level.
    fn thruster_levels(&self) -> Box<dyn Iterator<Item = f64> + '_>;

    /// Gets the surface-relative longitude and latitude, in radians.
    fn surface_position(&self) -> (f64, f64);

    /// Gets the current heading, in radians, if the host can provide one.
    fn heading(&self) -> Option<f64>;

    /// Replaces the vessel's kinematic state with the given landed pose.
    ///
    /// One-shot command. The host validates it and surfaces any failure through its
    /// own channels.
    fn set_landed_state(&self, pose: &LandedPose);
}

/// The host simulation, as seen by the engine.
pub trait Host {
    /// Gets all currently known vessels.
    ///
    /// The set may change between ticks, callers must not hold vessel references
    /// across ticks.
    fn vessels(&self) -> Vec<&dyn Vessel>;

    /// Gets the system (wall) time, in seconds. Monotonic.
    fn now(&self) -> f64;

    /// Gets the simulation time, in seconds.
    fn sim_time(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the decoding of raw host flight status integers.
    #[test]
    fn flight_status_from_raw() {
        assert_eq!(FlightStatus::from_raw(0), Some(FlightStatus::Free));
        assert_eq!(FlightStatus::from_raw(1), Some(FlightStatus::Landed));
        assert_eq!(FlightStatus::from_raw(2), Some(FlightStatus::DockedFree));
        assert_eq!(FlightStatus::from_raw(3), Some(FlightStatus::DockedLanded));
        assert_eq!(FlightStatus::from_raw(4), None);
    }

    /// Tests which flight statuses count as landed.
    #[test]
    fn flight_status_is_landed() {
        assert!(!FlightStatus::Free.is_landed());
        assert!(FlightStatus::Landed.is_landed());
        assert!(!FlightStatus::DockedFree.is_landed());
        assert!(FlightStatus::DockedLanded.is_landed());
    }

    /// Tests that new landed poses carry the alignment sentinel.
    #[test]
    fn landed_pose_alignment() {
        let pose = LandedPose::new(0.5, -0.25, 1.0);

        assert!((pose.longitude - 0.5).abs() < f64::EPSILON);
        assert!((pose.latitude + 0.25).abs() < f64::EPSILON);
        assert!((pose.heading - 1.0).abs() < f64::EPSILON);
        assert!((pose.alignment - TOUCHDOWN_ALIGNMENT).abs() < f64::EPSILON);
    }
}
