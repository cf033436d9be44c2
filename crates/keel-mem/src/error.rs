//! Failure taxonomy for the foundation layer
//!
//! Every fallible operation in this crate returns [`MemResult<T>`], a type
//! alias for `Result<T, MemError>`. Failures are raised exactly where the
//! violated precondition is detected, always before any state is mutated,
//! and carry a `Component::operation` scope label plus a description.

use thiserror::Error;

/// Error type for the foundation layer
///
/// The recognized kinds are a required reference being absent, required
/// text being empty, an index outside `[0, size)`, and free-form domain
/// failures (missing key, invalid suffix argument, unreadable file).
///
/// # Examples
///
/// ```rust
/// use keel_mem::MemError;
///
/// let err = MemError::index("List::get", 3, 3);
/// assert_eq!(
///     err.to_string(),
///     "[List::get] specified index (3) exceeds size (3)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemError {
    /// A required reference was absent
    #[error("[{scope}] variable '{name}' may not be null")]
    Null {
        /// Originating `Component::operation` label
        scope: String,
        /// Name of the absent variable
        name: String,
    },

    /// Required text had zero length
    #[error("[{scope}] variable '{name}' may not be empty")]
    Empty {
        /// Originating `Component::operation` label
        scope: String,
        /// Name of the empty variable
        name: String,
    },

    /// An index fell outside `[0, size)`
    #[error("[{scope}] specified index ({index}) exceeds size ({size})")]
    Index {
        /// Originating `Component::operation` label
        scope: String,
        /// The offending index
        index: usize,
        /// The size it was checked against
        size: usize,
    },

    /// A map lookup named a key with no entry
    #[error("[{scope}] no entry for key '{key}'")]
    KeyNotFound {
        /// Originating `Component::operation` label
        scope: String,
        /// The missing key, rendered lossily if not UTF-8
        key: String,
    },

    /// A template did not match its supplied values
    #[error("[{scope}] template error: {reason}")]
    Template {
        /// Originating `Component::operation` label
        scope: String,
        /// Why the expansion failed
        reason: String,
    },

    /// A file could not be opened or read
    #[error("[{scope}] cannot read '{path}': {reason}")]
    Unreadable {
        /// Originating `Component::operation` label
        scope: String,
        /// The path that failed
        path: String,
        /// The underlying I/O failure, as text
        reason: String,
    },
}

impl MemError {
    /// A required reference was absent
    pub fn null(scope: &str, name: &str) -> Self {
        Self::Null {
            scope: scope.to_string(),
            name: name.to_string(),
        }
    }

    /// Required text had zero length
    pub fn empty(scope: &str, name: &str) -> Self {
        Self::Empty {
            scope: scope.to_string(),
            name: name.to_string(),
        }
    }

    /// An index fell outside `[0, size)`
    pub fn index(scope: &str, index: usize, size: usize) -> Self {
        Self::Index {
            scope: scope.to_string(),
            index,
            size,
        }
    }

    /// A map lookup named a key with no entry
    pub fn key_not_found(scope: &str, key: &[u8]) -> Self {
        Self::KeyNotFound {
            scope: scope.to_string(),
            key: String::from_utf8_lossy(key).into_owned(),
        }
    }

    /// A template did not match its supplied values
    pub fn template(scope: &str, reason: impl Into<String>) -> Self {
        Self::Template {
            scope: scope.to_string(),
            reason: reason.into(),
        }
    }

    /// A file could not be opened or read
    pub fn unreadable(scope: &str, path: &str, source: &std::io::Error) -> Self {
        Self::Unreadable {
            scope: scope.to_string(),
            path: path.to_string(),
            reason: source.to_string(),
        }
    }
}

/// Result type for foundation-layer operations
///
/// # Examples
///
/// ```rust
/// use keel_mem::{MemResult, Text};
///
/// fn third_byte(text: &Text) -> MemResult<u8> {
///     text.byte_at(2)
/// }
/// ```
pub type MemResult<T> = Result<T, MemError>;
