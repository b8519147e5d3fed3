use crate::math::Vec3f;

/// Operator commands for one tick. Every field is clamped to [-1, 1];
/// non-finite values read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInputs {
    /// Rotor speed as a fraction of max rps; negative runs astern.
    pub throttle: f32,
    /// Stern plane deflection. Positive pitches the nose up when moving ahead.
    pub stern: f32,
    /// Rudder deflection. Positive turns the nose right (toward +X) when moving ahead.
    pub rudder: f32,
    /// Fairwater (sail) plane deflection, same sign convention as `stern`.
    pub fairwater: f32,
    /// Ballast pump speed. +1 floods both tanks, -1 blows them.
    pub ballast: f32,
    /// Trim pump speed. +1 moves water from the back tank to the front tank.
    pub trim: f32,
}

impl ControlInputs {
    pub fn clamped(self) -> Self {
        Self {
            throttle: unit(self.throttle),
            stern: unit(self.stern),
            rudder: unit(self.rudder),
            fairwater: unit(self.fairwater),
            ballast: unit(self.ballast),
            trim: unit(self.trim),
        }
    }
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Telemetry for a single integration step.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepReport {
    pub dt: f32,
    pub inputs: ControlInputs,
    // Body axes in world
    pub forward: Vec3f,
    pub up: Vec3f,
    pub right: Vec3f,
    // Mass & buoyancy
    pub mass: f32,
    pub depth: f32,
    pub submerged_fraction: f32,
    pub weight_n: f32,
    pub buoyancy_n: f32,
    pub buoy_net_n: f32,
    // Propulsion & drag
    pub rotor_rps: f32,
    pub thrust_n: f32,
    pub drag_n: f32,
    pub surge: f32, // forward component of velocity
    pub q_dyn: f32,
    // Body torques
    pub tau_planes: Vec3f,
    pub tau_righting: Vec3f,
    pub tau_damping: Vec3f,
    pub angular_velocity: Vec3f,
}
