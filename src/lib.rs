//! Coffer - typed collections for dynamic data
//!
//! # Overview
//!
//! Coffer provides collections whose contents are checked against a type
//! constraint fixed when the collection is created:
//!
//! - [`Sequence`]: a mutable list indexed `0..count`
//! - [`Dictionary`]: a mutable map with integer or string keys, iterated in
//!   insertion order
//! - [`ReadOnly`] views that expose the read side of either collection
//!
//! Values can be statically typed (`Sequence<i64>`) or dynamic
//! (`Sequence<Value>` with a constraint chosen at run time).
//!
//! # Quick Start
//!
//! ```
//! use coffer::{Dictionary, ErrorKind, ReadOnlyCollection, Sequence, seq};
//! use coffer::values::{Key, Value};
//!
//! let mut words = seq![String::from("a"), String::from(","), String::from("b")];
//! words.add("c".into()).unwrap();
//! let groups = words.split(&",".into(), None);
//! assert_eq!(groups.count(), 2);
//!
//! let mut scores = Dictionary::<Key, Value>::from_type_names("string", "int").unwrap();
//! scores.set(Key::from("ada"), Value::Int(10)).unwrap();
//! let err = scores.set(Key::from("alan"), Value::from("ten")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//!
//! let view = scores.read_only();
//! assert_eq!(view.keys().to_vec(), [Key::from("ada")]);
//! ```
//!
//! # Crates
//!
//! - [`types`]: the type model and registry
//! - [`values`]: dynamic values, keys and the element traits
//! - [`cache`]: a sanitizing in-memory cache
//! - [`debug`]: stack trace capture

pub mod debug;

pub use coffer_cache as cache;
pub use coffer_collections::*;
pub use coffer_types as types;
pub use coffer_values as values;
