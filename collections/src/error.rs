//! Errors reported by collection operations.
//!
//! Construction errors are returned from constructors and no collection is
//! created. Every other error is recoverable: the operation leaves the
//! collection untouched and the caller decides what to do with the error.
//! Recoverable errors are also reported as `warn` events.

use core::fmt;

use coffer_types::{Type, TypeConstraint, UnknownType};
use coffer_values::Key;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for collection operations.
pub type Result<T, E = CollectionError> = core::result::Result<T, E>;

/// Which side of an entry an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Key,
    Value,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Key => f.write_str("key"),
            Role::Value => f.write_str("value"),
        }
    }
}

/// The four kinds of collection failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch,
    DuplicateKey,
    KeyNotFound,
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum CollectionError {
    /// A key or value does not satisfy the collection's constraint.
    #[error("{role} of type `{found}` does not satisfy the `{expected}` constraint")]
    #[diagnostic(code(coffer::type_mismatch))]
    TypeMismatch {
        role: Role,
        expected: TypeConstraint,
        found: Type,
    },

    #[error("key {key} already exists")]
    #[diagnostic(
        code(coffer::duplicate_key),
        help("use `update` or `set` to replace an existing entry")
    )]
    DuplicateKey { key: Key },

    #[error("key {key} does not exist")]
    #[diagnostic(code(coffer::key_not_found))]
    KeyNotFound { key: Key },

    #[error(transparent)]
    #[diagnostic(code(coffer::invalid_argument))]
    InvalidArgument(#[from] InvalidArgument),
}

impl CollectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectionError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            CollectionError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            CollectionError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            CollectionError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl From<UnknownType> for CollectionError {
    fn from(err: UnknownType) -> Self {
        CollectionError::InvalidArgument(err.into())
    }
}

/// Structurally invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("ending index {end} is less than starting index {start}")]
    InvertedRange { start: usize, end: usize },

    #[error("index {index} is out of range for a sequence of {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("bound {bound} is past the last index of a sequence of {len} item(s)")]
    BoundOutOfRange { bound: usize, len: usize },

    #[error("dictionary keys must be integers or strings, found {name:?}")]
    UnsupportedKeyType { name: String },

    #[error("dictionary values cannot be declared null")]
    NullValueType,

    #[error("{role} constraint `{requested}` contradicts the element type `{actual}`")]
    ContradictoryConstraint {
        role: Role,
        requested: TypeConstraint,
        actual: Type,
    },

    #[error("{role} constraint `{requested}` can never be satisfied by this element type")]
    UnsatisfiableConstraint { role: Role, requested: Type },

    #[error(transparent)]
    UnknownType(#[from] UnknownType),
}

/// Report a recoverable failure and return it.
pub(crate) fn reject<T>(error: CollectionError) -> Result<T> {
    tracing::warn!(kind = ?error.kind(), %error, "collection operation rejected");
    Err(error)
}
