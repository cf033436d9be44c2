//! Single-slot scoped reference holder
//!
//! A `Slot<T>` holds at most one ownership claim at a time. Reassignment
//! retains the new occupant and releases the prior one in the same move,
//! so a slot never nets more than one claim; dropping the slot releases
//! the held claim exactly once.

use crate::shared::Shared;

/// Holder for at most one ownership claim on a `T`
#[derive(Debug)]
pub struct Slot<T> {
    held: Option<Shared<T>>,
}

impl<T> Slot<T> {
    /// Create an empty slot
    pub fn new() -> Self {
        Slot { held: None }
    }

    /// The held handle, if any; no ownership transfer
    pub fn get(&self) -> Option<&Shared<T>> {
        self.held.as_ref()
    }

    /// True iff the slot holds nothing
    pub fn is_empty(&self) -> bool {
        self.held.is_none()
    }

    /// Replace the occupant
    ///
    /// Retains `new` (if present) and releases the prior occupant (if
    /// any); passing `None` empties the slot.
    pub fn assign(&mut self, new: Option<&Shared<T>>) {
        self.held = new.map(Shared::retain);
    }

    /// Move the held claim out, leaving the slot empty
    pub fn take(&mut self) -> Option<Shared<T>> {
        self.held.take()
    }
}

impl<T: Default> Slot<T> {
    /// Fill the slot with a fresh default-constructed `T`
    ///
    /// After the call the slot is the sole holder: the new value's claim
    /// count is exactly 1.
    pub fn allocate_new(&mut self) {
        self.held = Some(Shared::allocate());
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::new()
    }
}
