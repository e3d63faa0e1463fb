pub mod csv_output;
pub mod math;
