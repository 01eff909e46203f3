//! Parking brake engine.
//!
//! Ties the automatic evaluator and the manual confirmation gate together and owns the
//! shared parking action. The host drives it through three entry points: one per
//! simulation tick ([`pre_step`](struct.ParkingBrake.html#method.pre_step)), one per
//! operator command ([`command`](struct.ParkingBrake.html#method.command)) and one per
//! display refresh ([`render`](struct.ParkingBrake.html#method.render)).

use tracing::{debug, info};

use crate::autopark::{should_park, VesselSnapshot};
use crate::confirm::{ConfirmGate, Request};
use crate::host::{Host, LandedPose, Vessel};
use crate::policy::Policy;

/// Operator commands exposed to the host input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggles automatic parking on or off.
    ToggleAuto,
    /// Parks the target vessel now, arming a confirmation first if it is airborne.
    ParkNow,
    /// Cycles the automatic parking mode.
    CycleMode,
}

impl Command {
    /// Gets the button label for hosts that render a button bar.
    #[must_use]
    pub fn label(self, policy: &Policy) -> &'static str {
        match self {
            Command::ToggleAuto => {
                if policy.enabled {
                    "OFF"
                } else {
                    "ON"
                }
            }
            Command::ParkNow => "NOW",
            Command::CycleMode => "MDE",
        }
    }
}

/// The parking brake decision engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParkingBrake {
    policy: Policy,
    confirm: ConfirmGate,
}

impl ParkingBrake {
    /// Creates an engine with the given startup policy.
    #[must_use]
    pub fn new(policy: Policy) -> ParkingBrake {
        ParkingBrake {
            policy,
            confirm: ConfirmGate::new(),
        }
    }

    /// Gets the current parking policy.
    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Gets the seconds left to confirm a pending manual request, if any, at
    /// wall-clock time `now`.
    #[must_use]
    pub fn pending_confirm(&self, now: f64) -> Option<f64> {
        self.confirm.remaining(now)
    }

    /// Per-tick evaluation entry point.
    ///
    /// Scans every vessel the host currently enumerates and parks the ones the policy
    /// approves. No vessel reference is held across ticks.
    pub fn pre_step(&mut self, host: &dyn Host) {
        if !self.policy.enabled {
            return;
        }

        let sim_time = host.sim_time();
        for vessel in host.vessels() {
            let snapshot = VesselSnapshot::read(vessel);
            if should_park(&self.policy, &snapshot) {
                self.park(vessel, sim_time);
            }
        }
    }

    /// Operator input entry point.
    pub fn command(&mut self, command: Command, target: &dyn Vessel, host: &dyn Host) {
        match command {
            Command::ToggleAuto => {
                self.policy.toggle();
                debug!(
                    "automatic parking switched {}",
                    if self.policy.enabled { "on" } else { "off" }
                );
            }
            Command::CycleMode => {
                self.policy.cycle_mode();
                debug!("parking mode cycled to {}", self.policy.mode);
            }
            Command::ParkNow => {
                // Contact is ground truth, no confirmation needed.
                if target.ground_contact() {
                    self.park(target, host.sim_time());
                } else {
                    match self.confirm.request(host.now()) {
                        Request::Confirmed => self.park(target, host.sim_time()),
                        Request::Armed => {
                            debug!("parking request for {} armed, awaiting confirmation", target.name());
                        }
                    }
                }
            }
        }
    }

    /// Parks `vessel` at its current surface position and heading.
    ///
    /// One-shot command: the host owns the landed physics from here on. Clears any
    /// pending manual confirmation, whichever vessel it was armed for.
    pub fn park(&mut self, vessel: &dyn Vessel, sim_time: f64) {
        let (longitude, latitude) = vessel.surface_position();
        let heading = vessel.heading().unwrap_or(0.0);

        vessel.set_landed_state(&LandedPose::new(longitude, latitude, heading));
        info!("Parking Brake parked {} at {:.1}", vessel.name(), sim_time);

        self.confirm.clear();
    }

    /// Renders the panel text for the target vessel at wall-clock time `now`.
    #[must_use]
    pub fn render(&self, target: &dyn Vessel, now: f64) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(format!(
            "Auto: {}",
            if self.policy.enabled { "ON" } else { "OFF" }
        ));

        if self.policy.enabled {
            lines.push(format!("Auto mode: {}", self.policy.mode));
        }

        if let Some(remaining) = self.confirm.remaining(now) {
            lines.push("Not in contact with ground!".to_owned());
            lines.push(format!("  Press NOW to confirm {remaining:.2}"));
        }

        if target.flight_status().is_landed() {
            lines.push("This vessel is LANDED".to_owned());
        } else {
            lines.push("This vessel is NOT landed".to_owned());
        }

        lines
    }
}
