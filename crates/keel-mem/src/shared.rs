//! Shared-ownership handles
//!
//! `Shared<T>` is the ownership currency of the whole layer: one handle is
//! one claim on the underlying value. Cloning a handle takes a new claim
//! (a retain), dropping one relinquishes it (a release), and the drop that
//! relinquishes the last claim destroys the value exactly once, recursively
//! dropping every handle the value itself holds. Over-release and
//! double-release cannot be expressed.
//!
//! Handles are single-threaded by construction (`Rc` + `RefCell`); sharing
//! a value across threads is a compile error, not undefined behavior.

use std::cell;
use std::fmt;
use std::rc::Rc;

/// Shared-ownership handle to a mutable value
///
/// A newly constructed value starts with exactly one claim, attributed to
/// the creator. The live claim count is observable through
/// [`ref_count`](Shared::ref_count) for diagnostics.
pub struct Shared<T> {
    inner: Rc<cell::RefCell<T>>,
}

/// Construct a value with a single ownership claim
pub fn shared<T>(value: T) -> Shared<T> {
    Shared::new(value)
}

impl<T> Shared<T> {
    /// Construct a value with a single ownership claim
    pub fn new(value: T) -> Self {
        Shared {
            inner: Rc::new(cell::RefCell::new(value)),
        }
    }

    /// Take a new ownership claim on the same value
    ///
    /// Identical to `clone()`; exists so that deliberate claims read as
    /// such at call sites.
    pub fn retain(&self) -> Shared<T> {
        self.clone()
    }

    /// Number of live ownership claims
    ///
    /// Diagnostic use only; always at least 1 while a handle exists.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Identity equality: do both handles denote the same value?
    ///
    /// Never compares contents.
    pub fn same(&self, other: &Shared<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Borrow the value immutably
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed mutably.
    pub fn borrow(&self) -> cell::Ref<'_, T> {
        self.inner.borrow()
    }

    /// Borrow the value mutably
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed.
    pub fn borrow_mut(&self) -> cell::RefMut<'_, T> {
        self.inner.borrow_mut()
    }
}

impl<T: Default> Shared<T> {
    /// Construct a default value with a single ownership claim
    pub fn allocate() -> Self {
        Shared::new(T::default())
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared({:?})", self.inner.borrow())
    }
}
