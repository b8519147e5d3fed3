use crate::math::{Mat3f, Quatf, Vec3f};
use crate::vehicle::Vehicle;

use super::terms::*;
use super::types::{ControlInputs, StepReport};

pub const GRAVITY: f32 = 9.81;
pub const SEAWATER_DENSITY: f32 = 1025.0; // kg/m³
/// Full deflection of any control plane (rad), ~25°.
pub const MAX_PLANE_ANGLE: f32 = 0.436;

// Fraction of total ballast capacity the pumps move per second at full speed
const BALLAST_PUMP_RATE: f32 = 0.02;
const TRIM_PUMP_RATE: f32 = 0.01;

/// Advance one vehicle by `dt` seconds under `inputs`.
///
/// Ballast is driven through the state's own setters: the fill pump through
/// the redistributing total setter, trim through the single-tank setters with
/// the transfer limited here so both tanks stay within capacity. Everything
/// else is explicit Euler: forces in world space, torques in body space,
/// orientation post-multiplied by the body rotation.
pub fn step_vehicle(vehicle: &mut Vehicle, inputs: ControlInputs, dt: f32) -> StepReport {
    if !(dt > 0.0 && dt.is_finite()) {
        return StepReport::default();
    }
    let inputs = inputs.clamped();
    let (c, state) = vehicle.parts_mut();

    // Ballast pumps
    let capacity = c.ballast_tank_capacity();
    let max_tank = c.max_tank_mass();
    if inputs.ballast != 0.0 {
        let target = (state.total_water_mass() + inputs.ballast * BALLAST_PUMP_RATE * capacity * dt)
            .clamp(0.0, capacity);
        state.set_total_water_mass(target);
    }
    if inputs.trim != 0.0 {
        let front = state.water_mass_front_tank();
        let back = state.water_mass_back_tank();
        let requested = inputs.trim * TRIM_PUMP_RATE * capacity * dt;
        // Positive moves back → front, limited by what back holds and front can take.
        let moved = if requested >= 0.0 {
            requested.min(back).min(max_tank - front).max(0.0)
        } else {
            requested.max(-front).max(back - max_tank).min(0.0)
        };
        state.set_water_mass_front_tank((front + moved).clamp(0.0, max_tank));
        state.set_water_mass_back_tank((back - moved).clamp(0.0, max_tank));
    }

    // Control settings
    let rps = inputs.throttle * c.max_rotor_rounds_per_second();
    state.set_rotor_rps(rps);
    state.set_stern_angle(inputs.stern * MAX_PLANE_ANGLE);
    state.set_rudder_angle(inputs.rudder * MAX_PLANE_ANGLE);
    state.set_fairwater_angle(inputs.fairwater * MAX_PLANE_ANGLE);

    // Mass, inertia and hydrostatics
    let mass = state.current_mass().max(1e-3);
    let inertia = Mat3f::from_diagonal(c.inertia_basis() * mass);
    state.set_moment_of_inertia(inertia);

    let center_depth = -state.position().y;
    let submerged = submerged_fraction(c, center_depth);
    let submerged_volume = c.submerged_displacement_volume() * submerged;
    state.set_depth(center_depth.max(0.0));
    state.set_submerged_volume(submerged_volume);

    let weight = mass * GRAVITY;
    let buoyancy = SEAWATER_DENSITY * GRAVITY * submerged_volume;
    state.set_weight(weight);
    state.set_buoyancy(buoyancy);

    // Body axes in world
    let orientation = state.orientation();
    let forward = state.forward_axis();
    let up = state.up_axis();
    let right = state.right_axis();

    // Propulsion and hull drag
    let thrust = rotor_thrust(c, rps);
    state.set_thrust(thrust);
    let velocity = state.speed();
    let v_body = orientation.inverse() * velocity;
    let drag_world = orientation * hull_drag_body(c, v_body);
    state.set_drag(drag_world.length());

    let buoy_net = buoyancy - weight;
    let force = forward * thrust + drag_world + Vec3f::new(0.0, buoy_net, 0.0);
    let acceleration = force / mass;

    // Torques
    let surge = v_body.z;
    let q_dyn = 0.5 * SEAWATER_DENSITY * surge * surge.abs();
    let omega = state.angular_velocity();
    let tau_planes = torque_planes(
        c,
        state.stern_angle(),
        state.fairwater_angle(),
        state.rudder_angle(),
        q_dyn,
    );
    let tau_righting = torque_righting(c, state.center_of_mass(), orientation, buoyancy);
    let tau_damping = torque_damping(c, omega);
    let tau = tau_planes + tau_righting + tau_damping;
    let angular_acceleration = inertia.inverse() * tau;

    // Integrate
    let velocity = velocity + acceleration * dt;
    state.set_acceleration(acceleration);
    state.set_speed(velocity);
    state.set_position(state.position() + velocity * dt);

    let omega = omega + angular_acceleration * dt;
    state.set_angular_acceleration(angular_acceleration);
    state.set_angular_velocity(omega);
    state.set_orientation(orientation * Quatf::from_scaled_axis(omega * dt));

    StepReport {
        dt,
        inputs,
        forward,
        up,
        right,
        mass,
        depth: state.depth(),
        submerged_fraction: submerged,
        weight_n: weight,
        buoyancy_n: buoyancy,
        buoy_net_n: buoy_net,
        rotor_rps: rps,
        thrust_n: thrust,
        drag_n: state.drag(),
        surge,
        q_dyn,
        tau_planes,
        tau_righting,
        tau_damping,
        angular_velocity: omega,
    }
}
