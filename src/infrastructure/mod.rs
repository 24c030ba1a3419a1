//! Infrastructure layer - Repository implementations, services and logging

pub mod logging;
pub mod services;
pub mod storage;
