//! In-memory repository implementation

use std::fmt::Debug;
use std::sync::Arc;

use crate::domain::traits::{Named, Repository};
use crate::domain::{Car, Driver, Race};

/// Insertion-ordered in-memory repository
///
/// Lookups scan linearly by name. Data is lost when the process terminates.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T>
where
    T: Named,
{
    entities: Vec<T>,
}

pub type CarRepository = InMemoryRepository<Arc<Car>>;
pub type DriverRepository = InMemoryRepository<Driver>;
pub type RaceRepository = InMemoryRepository<Race>;

impl<T> Default for InMemoryRepository<T>
where
    T: Named,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRepository<T>
where
    T: Named,
{
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Creates a repository pre-populated with entities, in the given order
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self { entities }
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Named + Debug,
{
    fn get_by_name(&self, name: &str) -> Option<&T> {
        self.entities.iter().find(|e| e.name() == name)
    }

    fn get_by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entities.iter_mut().find(|e| e.name() == name)
    }

    fn get_all(&self) -> &[T] {
        &self.entities
    }

    fn add(&mut self, entity: T) {
        self.entities.push(entity);
    }

    fn remove(&mut self, name: &str) -> bool {
        match self.entities.iter().position(|e| e.name() == name) {
            Some(index) => {
                self.entities.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestEntity {
        name: String,
        value: i32,
    }

    impl Named for TestEntity {
        fn name(&self) -> &str {
            &self.name
        }
    }

    fn entity(name: &str, value: i32) -> TestEntity {
        TestEntity {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut repo = InMemoryRepository::new();
        repo.add(entity("alpha", 1));

        assert_eq!(repo.get_by_name("alpha"), Some(&entity("alpha", 1)));
        assert!(repo.get_by_name("beta").is_none());
        assert!(repo.exists("alpha"));
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let mut repo = InMemoryRepository::new();
        repo.add(entity("charlie", 3));
        repo.add(entity("alpha", 1));
        repo.add(entity("bravo", 2));

        let names: Vec<&str> = repo.get_all().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["charlie", "alpha", "bravo"]);
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut repo = InMemoryRepository::new();
        repo.add(entity("alpha", 1));
        repo.add(entity("alpha", 2));

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get_by_name("alpha").map(|e| e.value), Some(1));
    }

    #[test]
    fn test_get_by_name_mut() {
        let mut repo = InMemoryRepository::new();
        repo.add(entity("alpha", 1));

        if let Some(e) = repo.get_by_name_mut("alpha") {
            e.value = 10;
        }

        assert_eq!(repo.get_by_name("alpha").map(|e| e.value), Some(10));
    }

    #[test]
    fn test_remove() {
        let mut repo = InMemoryRepository::new();
        repo.add(entity("alpha", 1));
        repo.add(entity("alpha", 2));

        assert!(repo.remove("alpha"));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get_by_name("alpha").map(|e| e.value), Some(2));
    }

    #[test]
    fn test_remove_not_found() {
        let mut repo: InMemoryRepository<TestEntity> = InMemoryRepository::new();

        assert!(!repo.remove("alpha"));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_with_entities() {
        let repo = InMemoryRepository::with_entities(vec![entity("alpha", 1), entity("bravo", 2)]);

        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_car_repository_lookup_by_model() {
        let mut repo = CarRepository::new();
        repo.add(Arc::new(Car::muscle("Mustang", 450).unwrap()));

        assert!(repo.get_by_name("Mustang").is_some());
        assert!(repo.get_by_name("Camaro").is_none());
    }
}
