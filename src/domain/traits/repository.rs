use std::fmt::Debug;
use std::sync::Arc;

/// Entities that are looked up by name
pub trait Named {
    fn name(&self) -> &str;
}

impl<T: Named> Named for Arc<T> {
    fn name(&self) -> &str {
        T::name(self)
    }
}

/// Name-indexed, insertion-ordered repository
///
/// Implementations do not reject duplicates; callers check with
/// [`Repository::get_by_name`] before calling [`Repository::add`].
pub trait Repository<T>: Debug
where
    T: Named,
{
    fn get_by_name(&self, name: &str) -> Option<&T>;

    fn get_by_name_mut(&mut self, name: &str) -> Option<&mut T>;

    /// Read-only view of every entity in insertion order
    fn get_all(&self) -> &[T];

    fn add(&mut self, entity: T);

    /// Removes the first entity with the given name, returns true if one was removed
    fn remove(&mut self, name: &str) -> bool;

    fn exists(&self, name: &str) -> bool {
        self.get_by_name(name).is_some()
    }

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}
