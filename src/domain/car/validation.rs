//! Car validation

use std::ops::RangeInclusive;

use thiserror::Error;

/// Errors that can occur during car validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarValidationError {
    #[error("Model {0} cannot be less than {1} symbols.")]
    InvalidModel(String, usize),

    #[error("Invalid horse power: {0}.")]
    InvalidHorsePower(i32),
}

pub const MIN_MODEL_LENGTH: usize = 4;

/// Validate a car model name
pub fn validate_model(model: &str) -> Result<(), CarValidationError> {
    if model.trim().is_empty() || model.chars().count() < MIN_MODEL_LENGTH {
        return Err(CarValidationError::InvalidModel(
            model.to_string(),
            MIN_MODEL_LENGTH,
        ));
    }

    Ok(())
}

/// Validate horsepower against the range a car kind allows
pub fn validate_horse_power(
    horse_power: i32,
    range: RangeInclusive<i32>,
) -> Result<(), CarValidationError> {
    if !range.contains(&horse_power) {
        return Err(CarValidationError::InvalidHorsePower(horse_power));
    }

    Ok(())
}
