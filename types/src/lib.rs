//! Runtime type tags for Coffer collections.
//!
//! Every collection declares, at construction, which type its keys and values
//! must have. This crate provides the vocabulary for those declarations:
//!
//! - [`Type`]: the closed set of runtime type tags
//! - [`KeyType`]: the subset of types a dictionary key may have
//! - [`TypeConstraint`]: "any" or exactly one [`Type`]
//! - [`TypeRegistry`]: name lookup, producing [`TypeDescriptor`]s
//!
//! # Example
//!
//! ```
//! use coffer_types::{Type, TypeConstraint, TypeRegistry};
//!
//! let int = TypeConstraint::parse("int").unwrap();
//! assert!(int.admits(Type::Int));
//! assert!(!int.admits(Type::Str));
//!
//! let any = TypeConstraint::parse("").unwrap();
//! assert!(any.admits(Type::Null));
//!
//! let seq = TypeRegistry::by_name("coffer::Sequence").unwrap();
//! assert_eq!(seq.short_name(), "Sequence");
//! ```

#![no_std]
extern crate alloc;

mod constraint;
mod registry;
mod ty;

pub use constraint::TypeConstraint;
pub use registry::{TypeDescriptor, TypeRegistry, UnknownType};
pub use ty::{KeyType, Type};
