//! In-memory host.
//!
//! A scriptable implementation of the [`host`](../host/index.html) traits, used by the
//! demo launcher and by tests. Everything lives in process memory and is driven from
//! the single execution context the engine assumes, so plain interior mutability is
//! enough.

use std::cell::{Cell, RefCell};

use crate::host::{FlightStatus, Host, LandedPose, Vessel};

/// A scripted vessel.
///
/// Freshly created vessels are free flying, without ground contact, at zero ground
/// speed, with no thrusters, at the surface origin with a zero heading.
#[derive(Debug)]
pub struct SimVessel {
    name: String,
    flight_status: Cell<FlightStatus>,
    ground_contact: Cell<bool>,
    ground_speed: Cell<f64>,
    thrusters: RefCell<Vec<f64>>,
    longitude: Cell<f64>,
    latitude: Cell<f64>,
    heading: Cell<Option<f64>>,
    landed_pose: Cell<Option<LandedPose>>,
}

impl SimVessel {
    /// Creates a new free-flying vessel with the given name.
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> SimVessel {
        SimVessel {
            name: name.into(),
            flight_status: Cell::new(FlightStatus::Free),
            ground_contact: Cell::new(false),
            ground_speed: Cell::new(0.0),
            thrusters: RefCell::new(Vec::new()),
            longitude: Cell::new(0.0),
            latitude: Cell::new(0.0),
            heading: Cell::new(Some(0.0)),
            landed_pose: Cell::new(None),
        }
    }

    /// Scripts the flight status.
    pub fn set_flight_status(&self, flight_status: FlightStatus) {
        self.flight_status.set(flight_status);
    }

    /// Scripts the ground contact flag.
    pub fn set_ground_contact(&self, ground_contact: bool) {
        self.ground_contact.set(ground_contact);
    }

    /// Scripts the ground speed, in m/s.
    pub fn set_ground_speed(&self, ground_speed: f64) {
        self.ground_speed.set(ground_speed);
    }

    /// Scripts the thruster levels.
    pub fn set_thrusters(&self, levels: Vec<f64>) {
        *self.thrusters.borrow_mut() = levels;
    }

    /// Scripts the surface position, in radians.
    pub fn set_surface_position(&self, longitude: f64, latitude: f64) {
        self.longitude.set(longitude);
        self.latitude.set(latitude);
    }

    /// Scripts the heading, in radians, or its absence.
    pub fn set_heading(&self, heading: Option<f64>) {
        self.heading.set(heading);
    }

    /// Gets the last landed pose issued to this vessel, if any.
    #[must_use]
    pub fn landed_pose(&self) -> Option<LandedPose> {
        self.landed_pose.get()
    }
}

impl Vessel for SimVessel {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn flight_status(&self) -> FlightStatus {
        self.flight_status.get()
    }

    fn ground_contact(&self) -> bool {
        self.ground_contact.get()
    }

    fn ground_speed(&self) -> f64 {
        self.ground_speed.get()
    }

    fn thruster_levels(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(self.thrusters.borrow().clone().into_iter())
    }

    fn surface_position(&self) -> (f64, f64) {
        (self.longitude.get(), self.latitude.get())
    }

    fn heading(&self) -> Option<f64> {
        self.heading.get()
    }

    fn set_landed_state(&self, pose: &LandedPose) {
        let landed = match self.flight_status.get() {
            FlightStatus::DockedFree | FlightStatus::DockedLanded => FlightStatus::DockedLanded,
            FlightStatus::Free | FlightStatus::Landed => FlightStatus::Landed,
        };

        self.flight_status.set(landed);
        self.ground_contact.set(true);
        self.ground_speed.set(0.0);
        self.landed_pose.set(Some(*pose));
    }
}

/// In-memory host with a wall clock and a simulation clock.
#[derive(Debug, Default)]
pub struct SimHost {
    vessels: Vec<SimVessel>,
    now: Cell<f64>,
    sim_time: Cell<f64>,
}

impl SimHost {
    /// Creates an empty host with both clocks at zero.
    #[must_use]
    pub fn new() -> SimHost {
        SimHost::default()
    }

    /// Adds a vessel to the simulation.
    pub fn add_vessel(&mut self, vessel: SimVessel) {
        self.vessels.push(vessel);
    }

    /// Gets the vessel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if no vessel with that index exists.
    #[must_use]
    pub fn vessel(&self, index: usize) -> &SimVessel {
        &self.vessels[index]
    }

    /// Advances the wall clock and the simulation clock, in seconds.
    pub fn advance(&self, wall: f64, sim: f64) {
        self.now.set(self.now.get() + wall);
        self.sim_time.set(self.sim_time.get() + sim);
    }
}

impl Host for SimHost {
    fn vessels(&self) -> Vec<&dyn Vessel> {
        self.vessels.iter().map(|v| -> &dyn Vessel { v }).collect()
    }

    fn now(&self) -> f64 {
        self.now.get()
    }

    fn sim_time(&self) -> f64 {
        self.sim_time.get()
    }
}
