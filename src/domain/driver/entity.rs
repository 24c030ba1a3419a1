//! Driver entity

use std::sync::Arc;

use super::validation::{validate_driver_name, DriverValidationError};
use crate::domain::car::Car;
use crate::domain::traits::Named;

/// Driver entity
#[derive(Debug, Clone)]
pub struct Driver {
    name: String,
    /// Shared handle; the car repository owns the entry
    car: Option<Arc<Car>>,
    number_of_wins: u32,
    can_participate: bool,
}

impl Driver {
    /// Create a new driver without a car
    pub fn new(name: impl Into<String>) -> Result<Self, DriverValidationError> {
        let name = name.into();
        validate_driver_name(&name)?;

        Ok(Self {
            name,
            car: None,
            number_of_wins: 0,
            can_participate: false,
        })
    }

    // Getters

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn car(&self) -> Option<&Arc<Car>> {
        self.car.as_ref()
    }

    pub fn number_of_wins(&self) -> u32 {
        self.number_of_wins
    }

    pub fn can_participate(&self) -> bool {
        self.can_participate
    }

    // Mutators

    /// Assign a car, which makes the driver eligible to race
    pub fn add_car(&mut self, car: Option<Arc<Car>>) -> Result<(), DriverValidationError> {
        let car = car.ok_or(DriverValidationError::MissingCar)?;
        self.car = Some(car);
        self.can_participate = true;
        Ok(())
    }

    pub fn win_race(&mut self) {
        self.number_of_wins += 1;
    }
}

impl Named for Driver {
    fn name(&self) -> &str {
        &self.name
    }
}
