mod generator_parameters;
mod method_choice;
mod schema;

pub use generator_parameters::GeneratorParameters;
pub use method_choice::{MethodItem, method_items};
pub use schema::*;
