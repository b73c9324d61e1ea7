use core::fmt;

use crate::{Type, TypeRegistry, UnknownType};

/// A declared restriction on the type of every key or value in a collection.
///
/// Fixed at construction; collections never change their constraint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeConstraint {
    /// Accepts every type, including [`Type::Null`].
    #[default]
    Any,

    /// Accepts exactly one type.
    Exactly(Type),
}

static_assertions::assert_eq_size!(TypeConstraint, Type);

impl TypeConstraint {
    /// Resolve a type name into a constraint.
    ///
    /// The empty (or all-whitespace) name means [`TypeConstraint::Any`]; every
    /// other name goes through [`TypeRegistry::by_name`].
    pub fn parse(name: &str) -> Result<Self, UnknownType> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(TypeConstraint::Any);
        }
        TypeRegistry::by_name(name)
            .map(|descriptor| TypeConstraint::Exactly(descriptor.ty()))
            .ok_or_else(|| UnknownType::new(name))
    }

    /// Whether a value of type `ty` satisfies this constraint.
    pub const fn admits(self, ty: Type) -> bool {
        match self {
            TypeConstraint::Any => true,
            // `Type: PartialEq` isn't const, compare discriminants instead.
            TypeConstraint::Exactly(expected) => expected as u8 == ty as u8,
        }
    }

    /// The single admitted type, or `None` for [`TypeConstraint::Any`].
    pub const fn ty(self) -> Option<Type> {
        match self {
            TypeConstraint::Any => None,
            TypeConstraint::Exactly(ty) => Some(ty),
        }
    }

    pub const fn is_any(self) -> bool {
        matches!(self, TypeConstraint::Any)
    }
}

impl From<Type> for TypeConstraint {
    fn from(ty: Type) -> Self {
        TypeConstraint::Exactly(ty)
    }
}

impl From<Option<Type>> for TypeConstraint {
    fn from(ty: Option<Type>) -> Self {
        ty.map_or(TypeConstraint::Any, TypeConstraint::Exactly)
    }
}

impl fmt::Display for TypeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeConstraint::Any => f.write_str("any"),
            TypeConstraint::Exactly(ty) => fmt::Display::fmt(ty, f),
        }
    }
}
