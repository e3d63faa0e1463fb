mod wizard;

pub use wizard::{prompt_method, prompt_parameters};
