//! Infrastructure services

mod controller;

pub use controller::{Controller, MIN_PARTICIPANTS};
