//! Identity-unique ordered collection
//!
//! A `List<T>` owns an insertion-ordered sequence of distinct handles,
//! where distinctness means identity (the same underlying value), never
//! content. One stored handle is one ownership claim, so the element
//! count always equals the number of claims the list holds. Searches are
//! linear identity scans.

use crate::error::{MemError, MemResult};
use crate::shared::Shared;

/// Insertion-ordered sequence of identity-distinct handles
#[derive(Debug)]
pub struct List<T> {
    items: Vec<Shared<T>>,
}

impl<T> List<T> {
    /// Create an empty list
    pub fn new() -> Self {
        List { items: Vec::new() }
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True iff the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The handle at `index`; no ownership transfer
    pub fn get(&self, index: usize) -> MemResult<&Shared<T>> {
        let size = self.items.len();
        self.items
            .get(index)
            .ok_or_else(|| MemError::index("List::get", index, size))
    }

    /// Position of `item` by identity, if present
    pub fn index_of(&self, item: &Shared<T>) -> Option<usize> {
        self.items.iter().position(|held| held.same(item))
    }

    /// Identity membership test, linear time
    pub fn contains(&self, item: &Shared<T>) -> bool {
        self.index_of(item).is_some()
    }

    /// Retain `item` and append it; no-op if already present by identity
    pub fn add(&mut self, item: &Shared<T>) {
        if self.contains(item) {
            return;
        }
        self.items.push(item.retain());
    }

    /// Add every element of `other`, preserving uniqueness and order
    pub fn add_all(&mut self, other: &List<T>) {
        for item in &other.items {
            self.add(item);
        }
    }

    /// Release the element at `index`; later elements keep relative order
    pub fn remove_at(&mut self, index: usize) -> MemResult<()> {
        if index >= self.items.len() {
            return Err(MemError::index("List::remove_at", index, self.items.len()));
        }
        self.items.remove(index);
        Ok(())
    }

    /// Release the identity match of `item` if present; no-op otherwise
    pub fn remove(&mut self, item: &Shared<T>) {
        if let Some(index) = self.index_of(item) {
            self.items.remove(index);
        }
    }

    /// Remove every element of `other` by identity
    pub fn remove_all(&mut self, other: &List<T>) {
        for item in &other.items {
            self.remove(item);
        }
    }

    /// Release every held claim and empty the list
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Become an independent sequence sharing `other`'s elements
    ///
    /// Clears self first, then takes one claim per element.
    pub fn copy_from(&mut self, other: &List<T>) {
        self.clear();
        self.items = other.items.iter().map(Shared::retain).collect();
    }

    /// Iterate over the held handles in order
    pub fn iter(&self) -> std::slice::Iter<'_, Shared<T>> {
        self.items.iter()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a Shared<T>;
    type IntoIter = std::slice::Iter<'a, Shared<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
