use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::Vec3f;

/// Raw parameter table for a vehicle class, as written in a preset or config
/// file. Turn it into [`VehicleConstants`] to validate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantsParams {
    pub empty_mass: f32, // kg, hull with empty tanks
    pub max_mass: f32,   // kg, hull with both tanks full
    pub length: f32,     // m
    pub width: f32,      // m, hull diameter
    /// Displaced water volume when fully submerged (m³).
    pub submerged_displacement_volume: f32,
    pub rotor_diameter: f32,
    pub max_rotor_rounds_per_second: f32,
    // Control surface planform areas (m²)
    pub stern_plane_area: f32,
    pub rudder_plane_area: f32,
    pub fairwater_plane_area: f32,
    // Dimensionless coefficients
    pub drag_coefficient: f32,
    pub thrust_coefficient: f32,
    pub stern_coefficient: f32,
    pub rudder_coefficient: f32,
    pub fairwater_coefficient: f32,
    /// Center of buoyancy in body space (meters).
    #[serde(default)]
    pub center_of_buoyancy: Vec3f,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstantsError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("max mass {max} must exceed empty mass {empty}")]
    MassOrdering { empty: f32, max: f32 },
}

/// Immutable geometric and material properties of one vehicle class.
///
/// Only constructible through validation, so every instance satisfies
/// `max_mass > empty_mass > 0` and has non-negative areas and coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConstantsParams", into = "ConstantsParams")]
pub struct VehicleConstants {
    params: ConstantsParams,
    ballast_tank_capacity: f32,
    hull_surface_area: f32,
    inertia_basis: Vec3f,
}

impl VehicleConstants {
    pub fn new(params: ConstantsParams) -> Result<Self, ConstantsError> {
        validate(&params)?;

        let radius = params.width * 0.5;
        let length = params.length;
        let ballast_tank_capacity = params.max_mass - params.empty_mass;
        // Closed cylinder: mantle plus both end caps
        let hull_surface_area = 2.0 * std::f32::consts::PI * radius * (length + radius);
        // Solid cylinder per kilogram, long axis along body Z
        let transverse = (3.0 * radius * radius + length * length) / 12.0;
        let inertia_basis = Vec3f::new(transverse, transverse, 0.5 * radius * radius);

        Ok(Self {
            params,
            ballast_tank_capacity,
            hull_surface_area,
            inertia_basis,
        })
    }

    pub fn params(&self) -> &ConstantsParams { &self.params }

    pub fn empty_mass(&self) -> f32 { self.params.empty_mass }
    pub fn max_mass(&self) -> f32 { self.params.max_mass }
    pub fn length(&self) -> f32 { self.params.length }
    pub fn width(&self) -> f32 { self.params.width }
    pub fn submerged_displacement_volume(&self) -> f32 { self.params.submerged_displacement_volume }
    pub fn rotor_diameter(&self) -> f32 { self.params.rotor_diameter }
    pub fn max_rotor_rounds_per_second(&self) -> f32 { self.params.max_rotor_rounds_per_second }
    pub fn stern_plane_area(&self) -> f32 { self.params.stern_plane_area }
    pub fn rudder_plane_area(&self) -> f32 { self.params.rudder_plane_area }
    pub fn fairwater_plane_area(&self) -> f32 { self.params.fairwater_plane_area }
    pub fn drag_coefficient(&self) -> f32 { self.params.drag_coefficient }
    pub fn thrust_coefficient(&self) -> f32 { self.params.thrust_coefficient }
    pub fn stern_coefficient(&self) -> f32 { self.params.stern_coefficient }
    pub fn rudder_coefficient(&self) -> f32 { self.params.rudder_coefficient }
    pub fn fairwater_coefficient(&self) -> f32 { self.params.fairwater_coefficient }
    pub fn center_of_buoyancy(&self) -> Vec3f { self.params.center_of_buoyancy }

    /// Combined capacity of both ballast tanks (kg).
    pub fn ballast_tank_capacity(&self) -> f32 { self.ballast_tank_capacity }

    /// Capacity of a single tank; the two tanks are equal halves.
    pub fn max_tank_mass(&self) -> f32 { self.ballast_tank_capacity * 0.5 }

    pub fn hull_surface_area(&self) -> f32 { self.hull_surface_area }

    /// Principal moments of inertia per kilogram (body X, Y, Z). Scale by the
    /// current mass to get the tensor diagonal.
    pub fn inertia_basis(&self) -> Vec3f { self.inertia_basis }
}

impl TryFrom<ConstantsParams> for VehicleConstants {
    type Error = ConstantsError;

    fn try_from(params: ConstantsParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl From<VehicleConstants> for ConstantsParams {
    fn from(constants: VehicleConstants) -> Self {
        constants.params
    }
}

fn validate(p: &ConstantsParams) -> Result<(), ConstantsError> {
    let scalars = [
        ("empty_mass", p.empty_mass),
        ("max_mass", p.max_mass),
        ("length", p.length),
        ("width", p.width),
        ("submerged_displacement_volume", p.submerged_displacement_volume),
        ("rotor_diameter", p.rotor_diameter),
        ("max_rotor_rounds_per_second", p.max_rotor_rounds_per_second),
        ("stern_plane_area", p.stern_plane_area),
        ("rudder_plane_area", p.rudder_plane_area),
        ("fairwater_plane_area", p.fairwater_plane_area),
        ("drag_coefficient", p.drag_coefficient),
        ("thrust_coefficient", p.thrust_coefficient),
        ("stern_coefficient", p.stern_coefficient),
        ("rudder_coefficient", p.rudder_coefficient),
        ("fairwater_coefficient", p.fairwater_coefficient),
    ];
    for (field, value) in scalars {
        if !value.is_finite() {
            return Err(ConstantsError::NonFinite { field });
        }
    }
    if !p.center_of_buoyancy.is_finite() {
        return Err(ConstantsError::NonFinite { field: "center_of_buoyancy" });
    }

    // The first five entries are sizes that must be strictly positive.
    for &(field, value) in &scalars[..5] {
        if value <= 0.0 {
            return Err(ConstantsError::NonPositive { field, value });
        }
    }
    if p.max_mass <= p.empty_mass {
        return Err(ConstantsError::MassOrdering { empty: p.empty_mass, max: p.max_mass });
    }
    for &(field, value) in &scalars[5..] {
        if value < 0.0 {
            return Err(ConstantsError::Negative { field, value });
        }
    }
    Ok(())
}
