//! Domain layer - entities, validation rules and repository contracts

pub mod car;
pub mod driver;
pub mod error;
pub mod race;
pub mod traits;

pub use car::{Car, CarKind};
pub use driver::Driver;
pub use error::DomainError;
pub use race::{Race, RaceStandings};
pub use traits::{Named, Repository};

impl From<car::CarValidationError> for DomainError {
    fn from(err: car::CarValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

impl From<driver::DriverValidationError> for DomainError {
    fn from(err: driver::DriverValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

impl From<race::RaceValidationError> for DomainError {
    fn from(err: race::RaceValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}
