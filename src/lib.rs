pub mod core;
pub mod error;
pub mod estimators;
pub mod numeric;
pub mod propensity;
pub mod streams;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
