//! Race validation

use thiserror::Error;

/// Errors that can occur during race validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RaceValidationError {
    #[error("Laps cannot be less than {0}.")]
    TooFewLaps(i32),
}

pub const MIN_LAPS: i32 = 1;

/// Validate a race lap count
pub fn validate_laps(laps: i32) -> Result<(), RaceValidationError> {
    if laps < MIN_LAPS {
        return Err(RaceValidationError::TooFewLaps(MIN_LAPS));
    }

    Ok(())
}
