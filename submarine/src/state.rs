use std::sync::Arc;

use crate::constants::VehicleConstants;
use crate::math::{normalize_or_identity, Mat3f, Quatf, Vec3f, BODY_FWD, BODY_UP};

/// Time-varying physical condition of one vehicle.
///
/// Frame conventions:
/// - Body axes: +Z forward, +Y up, +X right (starboard).
/// - World axes: +Z forward, +Y up, +X right; depth grows along −Y.
///
/// Vector and quaternion getters hand out copies, never references into the
/// live state.
#[derive(Debug, Clone)]
pub struct VehicleState {
    constants: Arc<VehicleConstants>,

    // Ballast (kg)
    total_water_mass: f32,
    water_mass_front_tank: f32,
    water_mass_back_tank: f32,

    rotor_rps: f32,
    submerged_volume: f32,
    depth: f32,

    // Kinematics, world frame
    position: Vec3f,
    speed: Vec3f,
    acceleration: Vec3f,
    /// Orientation as quaternion (body→world), always unit length.
    orientation: Quatf,
    // Body frame, rad/s and rad/s²
    angular_velocity: Vec3f,
    angular_acceleration: Vec3f,

    // Force magnitudes (N)
    weight: f32,
    buoyancy: f32,
    drag: f32,
    thrust: f32,

    // Control surface deflections (rad)
    stern_angle: f32,
    rudder_angle: f32,
    fairwater_angle: f32,

    moment_of_inertia: Mat3f,
    center_of_mass: Vec3f,
}

impl VehicleState {
    /// Fresh state at the origin: level, at rest, tanks empty.
    pub fn new(constants: Arc<VehicleConstants>) -> Self {
        let moment_of_inertia = Mat3f::from_diagonal(constants.inertia_basis() * constants.empty_mass());
        let mut state = Self {
            constants,
            total_water_mass: 0.0,
            water_mass_front_tank: 0.0,
            water_mass_back_tank: 0.0,
            rotor_rps: 0.0,
            submerged_volume: 0.0,
            depth: 0.0,
            position: Vec3f::ZERO,
            speed: Vec3f::ZERO,
            acceleration: Vec3f::ZERO,
            orientation: Quatf::IDENTITY,
            angular_velocity: Vec3f::ZERO,
            angular_acceleration: Vec3f::ZERO,
            weight: 0.0,
            buoyancy: 0.0,
            drag: 0.0,
            thrust: 0.0,
            stern_angle: 0.0,
            rudder_angle: 0.0,
            fairwater_angle: 0.0,
            moment_of_inertia,
            center_of_mass: Vec3f::ZERO,
        };
        state.update_center_of_mass();
        state
    }

    pub fn constants(&self) -> &VehicleConstants { &self.constants }

    /// Point this state at another constants table (e.g. after the owning
    /// vehicle swapped its constants) and resync the derived center of mass.
    pub(crate) fn bind_constants(&mut self, constants: Arc<VehicleConstants>) {
        self.constants = constants;
        self.update_center_of_mass();
    }

    // ----- Ballast -----

    pub fn total_water_mass(&self) -> f32 { self.total_water_mass }
    pub fn water_mass_front_tank(&self) -> f32 { self.water_mass_front_tank }
    pub fn water_mass_back_tank(&self) -> f32 { self.water_mass_back_tank }

    /// Request a new total ballast mass, splitting the change evenly between
    /// both tanks and spilling whatever one tank cannot hold (or give) into
    /// the other. Out-of-range requests are clamped silently.
    ///
    /// The stored total is the requested value, even when clamping made the
    /// tank sum differ from it. A non-finite request is ignored.
    pub fn set_total_water_mass(&mut self, new_total: f32) {
        if !new_total.is_finite() {
            return;
        }
        let max_per_tank = self.constants.max_tank_mass();
        let old_total = self.water_mass_front_tank + self.water_mass_back_tank;
        let half_delta = (new_total - old_total) * 0.5;

        let mut front = self.water_mass_front_tank + half_delta;
        let mut back = self.water_mass_back_tank + half_delta;

        // Front first: overflow or deficit moves to the back tank.
        if front > max_per_tank {
            back += front - max_per_tank;
            front = max_per_tank;
        } else if front < 0.0 {
            back += front;
            front = 0.0;
        }
        // Then back against front, so an overflow on one side can cover a
        // deficit on the other.
        if back > max_per_tank {
            front += back - max_per_tank;
            back = max_per_tank;
        } else if back < 0.0 {
            front += back;
            back = 0.0;
        }

        self.water_mass_front_tank = front.clamp(0.0, max_per_tank);
        self.water_mass_back_tank = back.clamp(0.0, max_per_tank);
        self.total_water_mass = new_total;
        self.update_center_of_mass();
    }

    /// Direct write to the front tank. No capacity clamp is applied; the
    /// total becomes the plain sum of both tanks.
    pub fn set_water_mass_front_tank(&mut self, mass: f32) {
        self.water_mass_front_tank = mass;
        self.total_water_mass = self.water_mass_front_tank + self.water_mass_back_tank;
        self.update_center_of_mass();
    }

    /// Direct write to the back tank; see [`Self::set_water_mass_front_tank`].
    pub fn set_water_mass_back_tank(&mut self, mass: f32) {
        self.water_mass_back_tank = mass;
        self.total_water_mass = self.water_mass_front_tank + self.water_mass_back_tank;
        self.update_center_of_mass();
    }

    /// Hull plus stored ballast total (kg).
    pub fn current_mass(&self) -> f32 {
        self.total_water_mass + self.constants.empty_mass()
    }

    /// Absolute front/back imbalance (kg).
    pub fn tanks_difference_mass(&self) -> f32 {
        (self.water_mass_front_tank - self.water_mass_back_tank).abs()
    }

    /// Body-frame center of mass, shifted along the long axis by tank
    /// imbalance: a full front tank over an empty back tank puts it a quarter
    /// length forward.
    pub fn center_of_mass(&self) -> Vec3f { self.center_of_mass }

    fn update_center_of_mass(&mut self) {
        let ratio = (self.water_mass_front_tank - self.water_mass_back_tank) / self.constants.max_tank_mass();
        self.center_of_mass = Vec3f::new(0.0, 0.0, ratio * self.constants.length() * 0.25);
    }

    // ----- Body axes (world frame, derived on demand) -----

    pub fn forward_axis(&self) -> Vec3f {
        self.orientation * BODY_FWD
    }

    pub fn up_axis(&self) -> Vec3f {
        self.orientation * BODY_UP
    }

    /// `up × forward`. Operand order fixes handedness; with identity
    /// orientation this is +X.
    pub fn right_axis(&self) -> Vec3f {
        self.up_axis().cross(self.forward_axis())
    }

    // ----- Kinematics -----

    pub fn position(&self) -> Vec3f { self.position }
    pub fn set_position(&mut self, position: Vec3f) { self.position = position; }

    pub fn speed(&self) -> Vec3f { self.speed }
    pub fn set_speed(&mut self, speed: Vec3f) { self.speed = speed; }

    pub fn acceleration(&self) -> Vec3f { self.acceleration }
    pub fn set_acceleration(&mut self, acceleration: Vec3f) { self.acceleration = acceleration; }

    pub fn orientation(&self) -> Quatf { self.orientation }

    /// Store a new orientation. Input is renormalized so the unit-length
    /// invariant holds regardless of integrator drift.
    pub fn set_orientation(&mut self, orientation: Quatf) {
        self.orientation = normalize_or_identity(orientation);
    }

    pub fn angular_velocity(&self) -> Vec3f { self.angular_velocity }
    pub fn set_angular_velocity(&mut self, angular_velocity: Vec3f) { self.angular_velocity = angular_velocity; }

    pub fn angular_acceleration(&self) -> Vec3f { self.angular_acceleration }
    pub fn set_angular_acceleration(&mut self, angular_acceleration: Vec3f) {
        self.angular_acceleration = angular_acceleration;
    }

    pub fn depth(&self) -> f32 { self.depth }
    pub fn set_depth(&mut self, depth: f32) { self.depth = depth; }

    pub fn submerged_volume(&self) -> f32 { self.submerged_volume }
    pub fn set_submerged_volume(&mut self, volume: f32) { self.submerged_volume = volume; }

    // ----- Dynamics -----

    pub fn rotor_rps(&self) -> f32 { self.rotor_rps }
    pub fn set_rotor_rps(&mut self, rps: f32) { self.rotor_rps = rps; }

    pub fn weight(&self) -> f32 { self.weight }
    pub fn set_weight(&mut self, weight: f32) { self.weight = weight; }

    pub fn buoyancy(&self) -> f32 { self.buoyancy }
    pub fn set_buoyancy(&mut self, buoyancy: f32) { self.buoyancy = buoyancy; }

    pub fn drag(&self) -> f32 { self.drag }
    pub fn set_drag(&mut self, drag: f32) { self.drag = drag; }

    pub fn thrust(&self) -> f32 { self.thrust }
    pub fn set_thrust(&mut self, thrust: f32) { self.thrust = thrust; }

    pub fn stern_angle(&self) -> f32 { self.stern_angle }
    pub fn set_stern_angle(&mut self, angle: f32) { self.stern_angle = angle; }

    pub fn rudder_angle(&self) -> f32 { self.rudder_angle }
    pub fn set_rudder_angle(&mut self, angle: f32) { self.rudder_angle = angle; }

    pub fn fairwater_angle(&self) -> f32 { self.fairwater_angle }
    pub fn set_fairwater_angle(&mut self, angle: f32) { self.fairwater_angle = angle; }

    pub fn moment_of_inertia(&self) -> Mat3f { self.moment_of_inertia }
    pub fn set_moment_of_inertia(&mut self, inertia: Mat3f) { self.moment_of_inertia = inertia; }
}
