//! Values that can be stored in Coffer collections.
//!
//! Collections are generic over their element type. Statically typed elements
//! (`i64`, `String`, ...) carry their type in the Rust type; [`Value`] and
//! [`Key`] are the dynamic counterparts, for collections whose constraint is
//! only known at runtime.
//!
//! The [`Element`] and [`KeyElement`] traits connect both worlds to the runtime
//! type tags of `coffer-types`.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

mod element;
mod key;
mod value;

pub use element::{Element, KeyElement, StaticKey, describe};
pub use key::Key;
pub use value::Value;
