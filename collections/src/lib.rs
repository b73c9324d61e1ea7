//! Typed collections: ordered sequences, insertion-ordered dictionaries and
//! read-only views over both.
//!
//! Every collection carries a type constraint fixed at construction. Writes
//! that would break the constraint are rejected with a [`CollectionError`]
//! and leave the collection unchanged.
//!
//! ```
//! use coffer_collections::{Dictionary, ErrorKind, ReadOnlyCollection, Sequence};
//! use coffer_values::{Key, Value};
//!
//! let mut names = Sequence::<Value>::from_type_name("string").unwrap();
//! names.add(Value::from("ada")).unwrap();
//! let err = names.add(Value::Int(7)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//!
//! let mut ages = Dictionary::<Key, Value>::from_type_names("string", "int").unwrap();
//! ages.set(Key::from("ada"), Value::Int(36)).unwrap();
//! assert_eq!(ages.read_only().lookup(&Key::from("ada")), Some(Value::Int(36)));
//! ```

mod check;
mod cursor;
mod dictionary;
mod error;
mod macros;
mod options;
mod sequence;
mod traits;
mod view;

pub use cursor::Cursor;
pub use dictionary::Dictionary;
pub use error::{CollectionError, ErrorKind, InvalidArgument, Result, Role};
pub use options::{BoundsPolicy, SequenceOptions};
pub use sequence::Sequence;
pub use traits::ReadOnlyCollection;
pub use view::{
    Backing, ReadOnly, ReadOnlyDictionary, ReadOnlySequence, Shared, SharedDictionary,
    SharedSequence, share,
};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize a tracing subscriber for tests at DEBUG level, or at the
    /// level given by `RUST_LOG`.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Ignore the error if another test already installed it.
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
