//! Easter Races
//!
//! An in-memory management console for the Easter Races game:
//! - Drivers, cars (muscle and sports) and races
//! - Car assignment and race registration
//! - Race standings from displacement, horsepower and lap count

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::DomainError;
pub use infrastructure::services::Controller;
