use core::fmt;

/// Runtime type tag of a collection element.
///
/// The set is closed: scalars, nested arrays of dynamic values, and the two
/// collection kinds themselves (so that a sequence of sequences can be
/// constrained like any other sequence).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Type {
    /// The absent value.
    Null,

    /// Boolean type
    Bool,

    /// 64-bit signed integer type
    Int,

    /// 64-bit floating-point type
    Float,

    /// UTF-8 string type
    Str,

    /// Array of dynamic values
    Array,

    /// A `Sequence` collection
    Sequence,

    /// A `Dictionary` collection
    Dictionary,
}

static_assertions::assert_eq_size!(Type, u8);

impl Type {
    /// Every type tag, in declaration order.
    pub const ALL: [Type; 8] = [
        Type::Null,
        Type::Bool,
        Type::Int,
        Type::Float,
        Type::Str,
        Type::Array,
        Type::Sequence,
        Type::Dictionary,
    ];

    /// Canonical name. Collection types are fully qualified.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Null => "null",
            Type::Bool => "boolean",
            Type::Int => "integer",
            Type::Float => "float",
            Type::Str => "string",
            Type::Array => "array",
            Type::Sequence => "coffer::Sequence",
            Type::Dictionary => "coffer::Dictionary",
        }
    }

    /// Short name: the last path segment for collection types, the common
    /// abbreviation for scalars.
    pub const fn short_name(self) -> &'static str {
        match self {
            Type::Null => "null",
            Type::Bool => "bool",
            Type::Int => "int",
            Type::Float => "float",
            Type::Str => "string",
            Type::Array => "array",
            Type::Sequence => "Sequence",
            Type::Dictionary => "Dictionary",
        }
    }

    /// The key type this type corresponds to, if any.
    pub const fn as_key_type(self) -> Option<KeyType> {
        match self {
            Type::Int => Some(KeyType::Int),
            Type::Str => Some(KeyType::Str),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type of dictionary keys.
///
/// Unlike values, keys are never untyped: a dictionary is either
/// integer-keyed or string-keyed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyType {
    Int,
    Str,
}

impl KeyType {
    pub const fn ty(self) -> Type {
        match self {
            KeyType::Int => Type::Int,
            KeyType::Str => Type::Str,
        }
    }
}

impl From<KeyType> for Type {
    fn from(key_type: KeyType) -> Self {
        key_type.ty()
    }
}

impl TryFrom<Type> for KeyType {
    type Error = Type;

    fn try_from(ty: Type) -> Result<Self, Self::Error> {
        ty.as_key_type().ok_or(ty)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_types_round_trip_through_type() {
        for key_type in [KeyType::Int, KeyType::Str] {
            assert_eq!(KeyType::try_from(key_type.ty()), Ok(key_type));
        }
    }

    #[test]
    fn test_only_int_and_str_are_key_types() {
        let keyed: alloc::vec::Vec<_> = Type::ALL
            .into_iter()
            .filter(|ty| ty.as_key_type().is_some())
            .collect();
        assert_eq!(keyed, [Type::Int, Type::Str]);
    }

    #[test]
    fn test_display_uses_canonical_name() {
        use alloc::string::ToString;

        assert_eq!(Type::Int.to_string(), "integer");
        assert_eq!(Type::Sequence.to_string(), "coffer::Sequence");
        assert_eq!(KeyType::Str.to_string(), "string");
    }
}
