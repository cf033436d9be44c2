//! Content-keyed map
//!
//! A `Dict<T>` owns (key, value) pairs: text keys compared by byte
//! content, never identity, and one ownership claim on each stored key
//! and value. The backing store is insertion-ordered with associative
//! content lookup; enumeration order is an internal detail and callers
//! must not rely on it.

use indexmap::IndexMap;

use crate::error::{MemError, MemResult};
use crate::list::List;
use crate::shared::{shared, Shared};
use crate::text::Text;

/// A stored pair: the retained key handle and the retained value handle.
#[derive(Debug)]
struct Entry<T> {
    key: Shared<Text>,
    value: Shared<T>,
}

/// Map from text keys (by content) to owned value handles
///
/// At most one entry exists per distinct key content; setting a
/// content-duplicate key releases the prior pair first, so only the
/// newest key instance for that content stays retained.
#[derive(Debug)]
pub struct Dict<T> {
    // Keyed by a snapshot of the key's bytes taken at insertion.
    entries: IndexMap<Vec<u8>, Entry<T>>,
}

impl<T> Default for Dict<T> {
    fn default() -> Self {
        Dict::new()
    }
}

impl<T> Dict<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Dict {
            entries: IndexMap::new(),
        }
    }

    /// Number of stored pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff the map holds no pairs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store a pair, retaining both key and value
    ///
    /// A zero-length key is a signaled failure, checked before any
    /// mutation. An existing entry with content-equal key is removed
    /// (releasing its key and value) before the new pair is inserted.
    pub fn set(&mut self, key: &Shared<Text>, value: &Shared<T>) -> MemResult<()> {
        let snapshot = key.borrow().as_bytes().to_vec();
        if snapshot.is_empty() {
            return Err(MemError::empty("Dict::set", "key"));
        }

        self.entries.insert(
            snapshot,
            Entry {
                key: key.retain(),
                value: value.retain(),
            },
        );
        Ok(())
    }

    /// Store a pair under a transient key built from raw text
    ///
    /// Net ownership effect is identical to [`set`](Dict::set) with an
    /// explicit key: the map ends up the sole holder of the fresh key.
    pub fn set_raw(&mut self, key: impl AsRef<[u8]>, value: &Shared<T>) -> MemResult<()> {
        let key = shared(Text::from(key.as_ref()));
        self.set(&key, value)
    }

    /// The value for `key`, a failure naming the key if absent
    pub fn get(&self, key: impl AsRef<[u8]>) -> MemResult<Shared<T>> {
        let key = key.as_ref();
        self.get_if_present(key)
            .ok_or_else(|| MemError::key_not_found("Dict::get", key))
    }

    /// The value for `key`, or `None` if absent
    ///
    /// The returned handle is the caller's own claim.
    pub fn get_if_present(&self, key: impl AsRef<[u8]>) -> Option<Shared<T>> {
        self.entries
            .get(key.as_ref())
            .map(|entry| entry.value.retain())
    }

    /// Content-based existence test
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Release the matching pair's key and value; no-op if absent
    pub fn remove(&mut self, key: impl AsRef<[u8]>) {
        self.entries.shift_remove(key.as_ref());
    }

    /// Replace `keys`' contents with independent copies of every stored key
    ///
    /// Each copy is a freshly constructed text with its own single claim
    /// (held by the list after the call). Enumeration order is internal
    /// and non-contractual.
    pub fn keys_into(&self, keys: &mut List<Text>) {
        keys.clear();
        for entry in self.entries.values() {
            let copy = shared(entry.key.borrow().clone());
            keys.add(&copy);
        }
    }

    /// Release every stored key and value and empty the map
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Become an independent map sharing `other`'s pairs
    ///
    /// Clears self first, then takes one claim on each key and value.
    pub fn copy_from(&mut self, other: &Dict<T>) {
        self.clear();
        for (snapshot, entry) in &other.entries {
            self.entries.insert(
                snapshot.clone(),
                Entry {
                    key: entry.key.retain(),
                    value: entry.value.retain(),
                },
            );
        }
    }

    /// Iterate over (key, value) handle pairs in internal order
    pub fn iter(&self) -> impl Iterator<Item = (&Shared<Text>, &Shared<T>)> {
        self.entries.values().map(|entry| (&entry.key, &entry.value))
    }
}
