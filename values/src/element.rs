//! Mapping between Rust types and runtime type tags.
//!
//! # Implemented for
//!
//! - `bool` (`Bool`), `i64` and `usize` (`Int`), `f64` (`Float`), `String` (`Str`)
//! - [`Value`] and [`Key`]: dynamic, the tag is read from the value
//!
//! Collection crates implement [`Element`] for their own containers so that
//! containers nest.

use alloc::string::String;
use core::fmt::Debug;
use core::hash::Hash;

use coffer_types::{KeyType, Type, TypeDescriptor, TypeRegistry};

use crate::{Key, Value};

/// A Rust type that can be stored in a collection.
pub trait Element: Clone + PartialEq + Debug {
    /// The type every value of `Self` has, or `None` if `Self` is dynamic and
    /// each value carries its own tag.
    const STATIC_TYPE: Option<Type>;

    /// The runtime type tag of this particular value.
    fn type_of(&self) -> Type;

    /// Whether some value of `Self` can have type `ty`.
    fn can_hold(ty: Type) -> bool {
        Self::STATIC_TYPE == Some(ty)
    }
}

/// A Rust type that can be used as a dictionary key.
pub trait KeyElement: Element + Eq + Hash {
    /// The key type every value of `Self` has, or `None` for [`Key`].
    const STATIC_KEY_TYPE: Option<KeyType>;

    fn key_type(&self) -> KeyType;

    /// Convert into the dynamic key representation (used in error reports).
    fn to_key(&self) -> Key;
}

/// A key type whose [`KeyType`] is fixed by the Rust type.
pub trait StaticKey: KeyElement {
    const KEY_TYPE: KeyType;
}

/// Descriptor of the runtime type of `value`.
pub fn describe<E: Element>(value: &E) -> TypeDescriptor {
    TypeRegistry::by_type(value.type_of())
}

// =============================================================================
// Scalar implementations
// =============================================================================

impl Element for bool {
    const STATIC_TYPE: Option<Type> = Some(Type::Bool);

    fn type_of(&self) -> Type {
        Type::Bool
    }
}

impl Element for i64 {
    const STATIC_TYPE: Option<Type> = Some(Type::Int);

    fn type_of(&self) -> Type {
        Type::Int
    }
}

impl KeyElement for i64 {
    const STATIC_KEY_TYPE: Option<KeyType> = Some(KeyType::Int);

    fn key_type(&self) -> KeyType {
        KeyType::Int
    }

    fn to_key(&self) -> Key {
        Key::Int(*self)
    }
}

impl StaticKey for i64 {
    const KEY_TYPE: KeyType = KeyType::Int;
}

// Sequence indices.
impl Element for usize {
    const STATIC_TYPE: Option<Type> = Some(Type::Int);

    fn type_of(&self) -> Type {
        Type::Int
    }
}

impl Element for f64 {
    const STATIC_TYPE: Option<Type> = Some(Type::Float);

    fn type_of(&self) -> Type {
        Type::Float
    }
}

impl Element for String {
    const STATIC_TYPE: Option<Type> = Some(Type::Str);

    fn type_of(&self) -> Type {
        Type::Str
    }
}

impl KeyElement for String {
    const STATIC_KEY_TYPE: Option<KeyType> = Some(KeyType::Str);

    fn key_type(&self) -> KeyType {
        KeyType::Str
    }

    fn to_key(&self) -> Key {
        Key::Str(self.clone())
    }
}

impl StaticKey for String {
    const KEY_TYPE: KeyType = KeyType::Str;
}

// =============================================================================
// Dynamic implementations
// =============================================================================

impl Element for Value {
    const STATIC_TYPE: Option<Type> = None;

    fn type_of(&self) -> Type {
        self.ty()
    }

    // Collections are never stored inside a `Value`.
    fn can_hold(ty: Type) -> bool {
        matches!(
            ty,
            Type::Null | Type::Bool | Type::Int | Type::Float | Type::Str | Type::Array
        )
    }
}

impl Element for Key {
    const STATIC_TYPE: Option<Type> = None;

    fn type_of(&self) -> Type {
        self.ty()
    }

    fn can_hold(ty: Type) -> bool {
        ty.as_key_type().is_some()
    }
}

impl KeyElement for Key {
    const STATIC_KEY_TYPE: Option<KeyType> = None;

    fn key_type(&self) -> KeyType {
        Key::key_type(self)
    }

    fn to_key(&self) -> Key {
        self.clone()
    }
}
