//! Automatic parking evaluator.
//!
//! The evaluator is a pure function of the parking policy and a per-tick snapshot of
//! one vessel. It keeps no state between ticks: every decision is recomputed from
//! current physical truth, so a policy change takes effect on the very next tick.

use crate::host::{FlightStatus, Vessel};
use crate::policy::{ParkMode, Policy};

/// Per-tick motion and contact snapshot of one vessel.
///
/// Read fresh from the host every tick, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselSnapshot {
    /// Current flight status.
    pub flight_status: FlightStatus,
    /// Whether the vessel currently touches the surface.
    pub ground_contact: bool,
    /// Current ground speed, in m/s.
    pub ground_speed: f64,
    /// Whether at least one thruster is at a non-zero level.
    pub thrusters_active: bool,
}

impl VesselSnapshot {
    /// Reads a fresh snapshot of `vessel`.
    ///
    /// The thruster scan stops at the first active thruster found, only the boolean
    /// "any active" is ever consumed.
    pub fn read(vessel: &dyn Vessel) -> VesselSnapshot {
        VesselSnapshot {
            flight_status: vessel.flight_status(),
            ground_contact: vessel.ground_contact(),
            ground_speed: vessel.ground_speed(),
            thrusters_active: vessel.thruster_levels().any(|level| level != 0.0),
        }
    }
}

/// Decides whether a vessel should be parked this tick.
///
/// A vessel is parked when automatic parking is enabled, the vessel is not already
/// landed, it touches the ground, no thruster is active, and the configured mode
/// condition holds: always in contact ("glue") mode, or ground speed strictly below
/// the configured limit in low speed mode. A vessel rejected here is simply
/// re-evaluated as a fresh candidate next tick.
#[must_use]
pub fn should_park(policy: &Policy, snapshot: &VesselSnapshot) -> bool {
    if !policy.enabled {
        return false;
    }

    // Never re-issue the landing command on an already-landed vessel.
    if snapshot.flight_status.is_landed() {
        return false;
    }

    if !snapshot.ground_contact {
        return false;
    }

    // Actively maneuvering, re-check next tick.
    if snapshot.thrusters_active {
        return false;
    }

    match policy.mode {
        ParkMode::Glue => true,
        ParkMode::LowSpeed => snapshot.ground_speed < policy.speed_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> VesselSnapshot {
        VesselSnapshot {
            flight_status: FlightStatus::Free,
            ground_contact: true,
            ground_speed: 0.05,
            thrusters_active: false,
        }
    }

    /// Tests that a disabled policy parks nothing, whatever the snapshot says.
    #[test]
    fn disabled_parks_nothing() {
        let policy = Policy {
            enabled: false,
            ..Policy::default()
        };

        assert!(!should_park(&policy, &candidate()));
        assert!(!should_park(
            &policy,
            &VesselSnapshot {
                ground_speed: 0.0,
                ..candidate()
            }
        ));
    }

    /// Tests that already-landed vessels are never parked again.
    #[test]
    fn landed_vessels_are_skipped() {
        let policy = Policy::default();

        for flight_status in [FlightStatus::Landed, FlightStatus::DockedLanded] {
            let snapshot = VesselSnapshot {
                flight_status,
                ..candidate()
            };
            assert!(!should_park(&policy, &snapshot));
        }
    }

    /// Tests that a vessel without ground contact is not a candidate.
    #[test]
    fn airborne_vessels_are_skipped() {
        let snapshot = VesselSnapshot {
            ground_contact: false,
            ..candidate()
        };
        assert!(!should_park(&Policy::default(), &snapshot));
    }

    /// Tests that any active thruster suppresses parking this tick, in either mode.
    #[test]
    fn active_thrusters_suppress_parking() {
        let snapshot = VesselSnapshot {
            thrusters_active: true,
            ..candidate()
        };

        let mut policy = Policy::default();
        assert!(!should_park(&policy, &snapshot));

        policy.mode = ParkMode::Glue;
        assert!(!should_park(&policy, &snapshot));
    }

    /// Tests that glue mode parks regardless of ground speed.
    #[test]
    fn glue_mode_ignores_speed() {
        let policy = Policy {
            mode: ParkMode::Glue,
            ..Policy::default()
        };
        let snapshot = VesselSnapshot {
            ground_speed: 250.0,
            ..candidate()
        };

        assert!(should_park(&policy, &snapshot));
    }

    /// Tests the strict speed limit of low speed mode.
    #[test]
    fn low_speed_mode_is_strict() {
        let policy = Policy {
            mode: ParkMode::LowSpeed,
            speed_limit: 0.1,
            ..Policy::default()
        };

        let below = VesselSnapshot {
            ground_speed: 0.099,
            ..candidate()
        };
        assert!(should_park(&policy, &below));

        // Exactly at the limit does not park.
        let at_limit = VesselSnapshot {
            ground_speed: 0.1,
            ..candidate()
        };
        assert!(!should_park(&policy, &at_limit));

        let above = VesselSnapshot {
            ground_speed: 0.2,
            ..candidate()
        };
        assert!(!should_park(&policy, &above));
    }

    /// Tests that docked-free vessels with contact are regular candidates.
    #[test]
    fn docked_free_vessels_are_candidates() {
        let snapshot = VesselSnapshot {
            flight_status: FlightStatus::DockedFree,
            ..candidate()
        };
        assert!(should_park(&Policy::default(), &snapshot));
    }
}
