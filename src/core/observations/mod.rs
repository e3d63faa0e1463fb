mod arm;
mod observation;

pub use arm::Arm;
pub use observation::Observation;
