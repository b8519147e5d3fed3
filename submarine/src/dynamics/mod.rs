mod terms;
mod types;
mod step;

pub use step::{step_vehicle, GRAVITY, MAX_PLANE_ANGLE, SEAWATER_DENSITY};
pub use types::{ControlInputs, StepReport};
