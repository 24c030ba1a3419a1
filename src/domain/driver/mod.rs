//! Driver domain module
//!
//! A driver becomes eligible to race once a car is assigned.

mod entity;
mod validation;

pub use entity::Driver;
pub use validation::{validate_driver_name, DriverValidationError, MIN_DRIVER_NAME_LENGTH};
