//! Car domain module
//!
//! Cars come in two kinds that differ only in fixed displacement and the
//! horsepower range they accept.

mod entity;
mod validation;

pub use entity::{Car, CarKind};
pub use validation::{validate_horse_power, validate_model, CarValidationError, MIN_MODEL_LENGTH};
