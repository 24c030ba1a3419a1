//! Race domain module

mod entity;
mod standings;
mod validation;

pub use entity::Race;
pub use standings::{Placement, RaceStandings, PODIUM_SIZE};
pub use validation::{validate_laps, RaceValidationError, MIN_LAPS};
