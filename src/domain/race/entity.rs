//! Race entity

use super::validation::{validate_laps, RaceValidationError};
use crate::domain::traits::Named;

/// Race entity
///
/// The roster holds driver names, which are keys into the driver repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    name: String,
    laps: i32,
    drivers: Vec<String>,
}

impl Race {
    /// Create a new race with an empty roster
    pub fn new(name: impl Into<String>, laps: i32) -> Result<Self, RaceValidationError> {
        validate_laps(laps)?;

        Ok(Self {
            name: name.into(),
            laps,
            drivers: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn laps(&self) -> i32 {
        self.laps
    }

    pub fn drivers(&self) -> &[String] {
        &self.drivers
    }

    /// Register a driver by name. Repeat registrations are kept.
    pub fn add_driver(&mut self, driver_name: impl Into<String>) {
        self.drivers.push(driver_name.into());
    }
}

impl Named for Race {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_creation() {
        let race = Race::new("Spring", 5).unwrap();

        assert_eq!(race.name(), "Spring");
        assert_eq!(race.laps(), 5);
        assert!(race.drivers().is_empty());
    }

    #[test]
    fn test_race_invalid_laps() {
        assert_eq!(
            Race::new("Spring", 0),
            Err(RaceValidationError::TooFewLaps(1))
        );
    }

    #[test]
    fn test_add_driver_keeps_order() {
        let mut race = Race::new("Spring", 5).unwrap();

        race.add_driver("Ivan01");
        race.add_driver("Maria01");

        assert_eq!(race.drivers(), ["Ivan01", "Maria01"]);
    }

    #[test]
    fn test_add_driver_twice_is_not_deduplicated() {
        let mut race = Race::new("Spring", 5).unwrap();

        race.add_driver("Ivan01");
        race.add_driver("Ivan01");

        assert_eq!(race.drivers().len(), 2);
    }
}
