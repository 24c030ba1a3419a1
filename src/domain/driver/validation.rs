//! Driver validation

use thiserror::Error;

/// Errors that can occur during driver validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DriverValidationError {
    #[error("Name {0} cannot be less than {1} symbols.")]
    InvalidName(String, usize),

    #[error("Car cannot be null.")]
    MissingCar,
}

pub const MIN_DRIVER_NAME_LENGTH: usize = 5;

/// Validate a driver name
pub fn validate_driver_name(name: &str) -> Result<(), DriverValidationError> {
    if name.trim().is_empty() || name.chars().count() < MIN_DRIVER_NAME_LENGTH {
        return Err(DriverValidationError::InvalidName(
            name.to_string(),
            MIN_DRIVER_NAME_LENGTH,
        ));
    }

    Ok(())
}
