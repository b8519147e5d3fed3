use crate::constants::{ConstantsError, ConstantsParams, VehicleConstants};
use crate::math::Vec3f;
use crate::registry::VehicleRegistry;
use crate::vehicle::Vehicle;

pub const OHIO: &str = "Ohio";
pub const TYPHOON: &str = "Typhoon";

// Both presets sit close to neutral buoyancy at half ballast:
// displacement × 1025 kg/m³ ≈ empty mass + capacity / 2.

pub fn ohio_params() -> ConstantsParams {
    ConstantsParams {
        empty_mass: 16_764_000.0,
        max_mass: 36_528_000.0,
        length: 170.0,
        width: 12.8,
        submerged_displacement_volume: 26_000.0,
        rotor_diameter: 7.0,
        max_rotor_rounds_per_second: 3.0,
        stern_plane_area: 40.0,
        rudder_plane_area: 35.0,
        fairwater_plane_area: 20.0,
        drag_coefficient: 0.004,
        thrust_coefficient: 0.12,
        stern_coefficient: 0.6,
        rudder_coefficient: 0.6,
        fairwater_coefficient: 0.5,
        center_of_buoyancy: Vec3f::new(0.0, 0.5, 0.0),
    }
}

pub fn typhoon_params() -> ConstantsParams {
    ConstantsParams {
        empty_mass: 23_200_000.0,
        max_mass: 48_000_000.0,
        length: 175.0,
        width: 23.0,
        submerged_displacement_volume: 34_750.0,
        rotor_diameter: 5.5,
        max_rotor_rounds_per_second: 3.5,
        stern_plane_area: 60.0,
        rudder_plane_area: 50.0,
        fairwater_plane_area: 30.0,
        drag_coefficient: 0.004,
        thrust_coefficient: 0.2,
        stern_coefficient: 0.6,
        rudder_coefficient: 0.6,
        fairwater_coefficient: 0.5,
        center_of_buoyancy: Vec3f::new(0.0, 0.8, 0.0),
    }
}

pub fn ohio() -> Result<VehicleConstants, ConstantsError> {
    VehicleConstants::new(ohio_params())
}

pub fn typhoon() -> Result<VehicleConstants, ConstantsError> {
    VehicleConstants::new(typhoon_params())
}

/// Constants for a preset class by name, `None` if there is no such preset.
pub fn preset(class: &str) -> Option<Result<VehicleConstants, ConstantsError>> {
    match class {
        OHIO => Some(ohio()),
        TYPHOON => Some(typhoon()),
        _ => None,
    }
}

/// Registry with every preset class; Ohio is current.
pub fn default_registry() -> Result<VehicleRegistry, ConstantsError> {
    let mut registry = VehicleRegistry::new(Vehicle::new(OHIO, ohio()?));
    registry.insert(Vehicle::new(TYPHOON, typhoon()?));
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEAWATER_DENSITY: f32 = 1025.0;

    #[test]
    fn presets_validate_and_float_near_half_ballast() {
        for class in [OHIO, TYPHOON] {
            let c = preset(class).unwrap().unwrap();
            let neutral = c.empty_mass() + 0.5 * c.ballast_tank_capacity();
            let displaced = c.submerged_displacement_volume() * SEAWATER_DENSITY;
            assert!(
                ((displaced - neutral) / neutral).abs() < 0.01,
                "{class}: displaced {displaced} vs neutral {neutral}"
            );
        }
        assert!(preset("Akula").is_none());
    }

    #[test]
    fn default_registry_holds_both_presets() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.current_class().as_str(), OHIO);
        assert!(registry.get(TYPHOON).is_ok());
    }
}
