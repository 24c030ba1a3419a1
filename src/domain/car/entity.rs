//! Car entity and related types

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::validation::{validate_horse_power, validate_model, CarValidationError};
use crate::domain::traits::Named;

/// Kind of car, fixing its displacement and allowed horsepower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarKind {
    Muscle,
    Sports,
}

impl CarKind {
    pub const MUSCLE_TAG: &'static str = "Muscle";
    pub const SPORTS_TAG: &'static str = "Sports";

    /// Parse an exact type tag, `None` for anything unrecognised
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            Self::MUSCLE_TAG => Some(Self::Muscle),
            Self::SPORTS_TAG => Some(Self::Sports),
            _ => None,
        }
    }

    pub fn cubic_centimeters(&self) -> f64 {
        match self {
            Self::Muscle => 5000.0,
            Self::Sports => 3000.0,
        }
    }

    pub fn horse_power_range(&self) -> RangeInclusive<i32> {
        match self {
            Self::Muscle => 400..=600,
            Self::Sports => 250..=450,
        }
    }

    /// Concrete type name used in console messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Muscle => "MuscleCar",
            Self::Sports => "SportsCar",
        }
    }
}

impl std::fmt::Display for CarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Car entity
///
/// Immutable once built. Drivers share it through an `Arc` handle while the car
/// repository keeps the owning entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    model: String,
    horse_power: i32,
    kind: CarKind,
}

impl Car {
    /// Create a new car, validating the model before the horsepower
    pub fn new(
        kind: CarKind,
        model: impl Into<String>,
        horse_power: i32,
    ) -> Result<Self, CarValidationError> {
        let model = model.into();
        validate_model(&model)?;
        validate_horse_power(horse_power, kind.horse_power_range())?;

        Ok(Self {
            model,
            horse_power,
            kind,
        })
    }

    pub fn muscle(model: impl Into<String>, horse_power: i32) -> Result<Self, CarValidationError> {
        Self::new(CarKind::Muscle, model, horse_power)
    }

    pub fn sports(model: impl Into<String>, horse_power: i32) -> Result<Self, CarValidationError> {
        Self::new(CarKind::Sports, model, horse_power)
    }

    // Getters

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn horse_power(&self) -> i32 {
        self.horse_power
    }

    pub fn cubic_centimeters(&self) -> f64 {
        self.kind.cubic_centimeters()
    }

    pub fn kind(&self) -> CarKind {
        self.kind
    }

    /// Points scored over `laps`: displacement / horsepower * laps
    pub fn calculate_race_points(&self, laps: i32) -> f64 {
        self.cubic_centimeters() / f64::from(self.horse_power) * f64::from(laps)
    }
}

impl Named for Car {
    fn name(&self) -> &str {
        &self.model
    }
}
