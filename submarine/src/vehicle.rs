use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::VehicleConstants;
use crate::state::VehicleState;

/// Identifier of a vehicle class, e.g. "Ohio" or "Typhoon".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleClass(String);

impl VehicleClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VehicleClass {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VehicleClass {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for VehicleClass {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One simulated vehicle: a class, its constants and its live state.
#[derive(Debug, Clone)]
pub struct Vehicle {
    class: VehicleClass,
    constants: Arc<VehicleConstants>,
    state: VehicleState,
}

impl Vehicle {
    pub fn new(class: impl Into<VehicleClass>, constants: VehicleConstants) -> Self {
        let constants = Arc::new(constants);
        let state = VehicleState::new(Arc::clone(&constants));
        Self {
            class: class.into(),
            constants,
            state,
        }
    }

    pub fn class(&self) -> &VehicleClass { &self.class }

    pub fn constants(&self) -> &VehicleConstants { &self.constants }

    pub fn state(&self) -> &VehicleState { &self.state }

    pub fn state_mut(&mut self) -> &mut VehicleState { &mut self.state }

    /// Borrow constants and mutable state together, as a tick integrator needs.
    pub fn parts_mut(&mut self) -> (&VehicleConstants, &mut VehicleState) {
        (&*self.constants, &mut self.state)
    }

    /// Replace the whole state. The incoming state is rebound to this
    /// vehicle's constants.
    pub fn set_state(&mut self, state: VehicleState) {
        self.state = state;
        self.state.bind_constants(Arc::clone(&self.constants));
    }

    /// Replace the constants table; the current state keeps its values but
    /// derives from the new table from now on.
    pub fn set_constants(&mut self, constants: VehicleConstants) {
        self.constants = Arc::new(constants);
        self.state.bind_constants(Arc::clone(&self.constants));
    }

    /// Start a new run: fresh state at the origin with empty tanks.
    pub fn reset_state(&mut self) {
        self.state = VehicleState::new(Arc::clone(&self.constants));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn set_state_rebinds_constants() {
        let mut ohio = Vehicle::new(catalog::OHIO, catalog::ohio().unwrap());
        let typhoon = Vehicle::new(catalog::TYPHOON, catalog::typhoon().unwrap());

        let mut foreign = typhoon.state().clone();
        foreign.set_water_mass_front_tank(1_000_000.0);
        ohio.set_state(foreign);

        assert_eq!(ohio.state().constants(), ohio.constants());
        let expected = 1_000_000.0 / ohio.constants().max_tank_mass() * ohio.constants().length() * 0.25;
        assert!((ohio.state().center_of_mass().z - expected).abs() < 1e-3);
    }

    #[test]
    fn set_constants_recomputes_center_of_mass() {
        let mut vehicle = Vehicle::new(catalog::OHIO, catalog::ohio().unwrap());
        vehicle.state_mut().set_water_mass_front_tank(2_000_000.0);
        let before = vehicle.state().center_of_mass().z;

        vehicle.set_constants(catalog::typhoon().unwrap());
        let after = vehicle.state().center_of_mass().z;
        assert_eq!(vehicle.state().constants(), &catalog::typhoon().unwrap());
        assert_ne!(before, after);
        assert_eq!(vehicle.state().water_mass_front_tank(), 2_000_000.0);
    }

    #[test]
    fn reset_state_starts_over() {
        let mut vehicle = Vehicle::new("Ohio", catalog::ohio().unwrap());
        vehicle.state_mut().set_total_water_mass(5_000_000.0);
        vehicle.reset_state();
        assert_eq!(vehicle.state().total_water_mass(), 0.0);
        assert_eq!(vehicle.class().as_str(), "Ohio");
    }
}
