//! Traits shared by every entity kind

mod repository;

pub use repository::{Named, Repository};
