//! Physical state model for ballast-driven submarines.
//!
//! This crate intentionally avoids any rendering or ECS types. It holds the
//! per-class constants, the per-vehicle mutable state with its ballast and
//! center-of-mass bookkeeping, the registry of vehicles with one active, and
//! a reference tick integrator that drives the state.

mod math;
pub use math::{normalize_or_identity, Mat3f, Quatf, Vec3f, BODY_FWD, BODY_RIGHT, BODY_UP};

mod constants;
pub use constants::{ConstantsError, ConstantsParams, VehicleConstants};

mod state;
pub use state::VehicleState;

mod vehicle;
pub use vehicle::{Vehicle, VehicleClass};

mod registry;
pub use registry::{RegistryError, RegistryEvent, SubscriptionId, VehicleRegistry};

pub mod catalog;

pub mod dynamics;
pub use dynamics::{step_vehicle, ControlInputs, StepReport};
