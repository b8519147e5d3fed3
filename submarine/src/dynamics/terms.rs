use crate::constants::VehicleConstants;
use crate::math::{Quatf, Vec3f};

use super::step::SEAWATER_DENSITY;

// Cross-flow drag coefficient of a cylinder moving sideways
const CROSSFLOW_DRAG: f32 = 1.0;

// ----- Buoyancy -----

/// Fraction of the hull below the surface for a hull center `depth` meters
/// down, with a straight waterline across the hull width.
pub(super) fn submerged_fraction(c: &VehicleConstants, depth: f32) -> f32 {
    ((depth + 0.5 * c.width()) / c.width()).clamp(0.0, 1.0)
}

// ----- Propulsion & drag -----

/// Open-water propeller thrust `K_T·ρ·n|n|·D⁴`; sign follows the rotor direction.
pub(super) fn rotor_thrust(c: &VehicleConstants, rps: f32) -> f32 {
    c.thrust_coefficient() * SEAWATER_DENSITY * rps * rps.abs() * c.rotor_diameter().powi(4)
}

/// Quadratic hull drag in body axes. Surge sees skin friction over the whole
/// hull surface, sway and heave see cross-flow over the side profile.
pub(super) fn hull_drag_body(c: &VehicleConstants, v_body: Vec3f) -> Vec3f {
    let half_rho = 0.5 * SEAWATER_DENSITY;
    let profile = c.length() * c.width();
    Vec3f::new(
        -half_rho * CROSSFLOW_DRAG * profile * v_body.x * v_body.x.abs(),
        -half_rho * CROSSFLOW_DRAG * profile * v_body.y * v_body.y.abs(),
        -half_rho * c.drag_coefficient() * c.hull_surface_area() * v_body.z * v_body.z.abs(),
    )
}

// ----- Torques (body frame) -----

/// Control plane torques for signed dynamic pressure `q_dyn`. Planes act at
/// half a hull length from the center; reversing flips their effect.
pub(super) fn torque_planes(
    c: &VehicleConstants,
    stern_angle: f32,
    fairwater_angle: f32,
    rudder_angle: f32,
    q_dyn: f32,
) -> Vec3f {
    let arm = 0.5 * c.length();
    // Positive pitch deflection raises the nose: negative torque about +X.
    let pitch = -(c.stern_coefficient() * c.stern_plane_area() * stern_angle
        + c.fairwater_coefficient() * c.fairwater_plane_area() * fairwater_angle)
        * q_dyn
        * arm;
    // Positive rudder swings the nose toward +X: positive torque about +Y.
    let yaw = c.rudder_coefficient() * c.rudder_plane_area() * rudder_angle * q_dyn * arm;
    Vec3f::new(pitch, yaw, 0.0)
}

/// Moment of the buoyant force, applied at the center of buoyancy, about the
/// center of mass. Pulls the heavier end down and rights the hull when the
/// center of buoyancy sits above the center of mass.
pub(super) fn torque_righting(
    c: &VehicleConstants,
    center_of_mass: Vec3f,
    orientation: Quatf,
    buoyancy: f32,
) -> Vec3f {
    let r_world = orientation * (c.center_of_buoyancy() - center_of_mass);
    let moment_world = r_world.cross(Vec3f::new(0.0, buoyancy, 0.0));
    orientation.inverse() * moment_world
}

/// Quadratic rotational damping from cross-flow along the hull.
/// Integrating ½ρC·w·(ωx)²·x over both halves of a hull gives ρC·w·(l/2)⁴/4.
pub(super) fn torque_damping(c: &VehicleConstants, omega: Vec3f) -> Vec3f {
    let quarter_rho = 0.25 * SEAWATER_DENSITY * CROSSFLOW_DRAG;
    let half_len = 0.5 * c.length();
    let half_width = 0.5 * c.width();
    let k_transverse = quarter_rho * c.width() * half_len.powi(4);
    let k_roll = quarter_rho * c.length() * half_width.powi(4);
    Vec3f::new(
        -k_transverse * omega.x * omega.x.abs(),
        -k_transverse * omega.y * omega.y.abs(),
        -k_roll * omega.z * omega.z.abs(),
    )
}
