use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

use crate::Type;

/// Every name a type can be looked up by, including aliases.
///
/// Scalar names match case-insensitively. Collection names are accepted
/// either fully qualified or by their short name.
const NAMES: &[(&str, Type)] = &[
    ("null", Type::Null),
    ("bool", Type::Bool),
    ("boolean", Type::Bool),
    ("int", Type::Int),
    ("integer", Type::Int),
    ("float", Type::Float),
    ("double", Type::Float),
    ("str", Type::Str),
    ("string", Type::Str),
    ("array", Type::Array),
    ("coffer::Sequence", Type::Sequence),
    ("Sequence", Type::Sequence),
    ("coffer::Dictionary", Type::Dictionary),
    ("Dictionary", Type::Dictionary),
];

/// A type name that the registry does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type name `{name}`")]
pub struct UnknownType {
    name: String,
}

impl UnknownType {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Describes a [`Type`] by its names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    ty: Type,
}

impl TypeDescriptor {
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Canonical name, e.g. `"integer"` or `"coffer::Sequence"`.
    pub const fn name(&self) -> &'static str {
        self.ty.name()
    }

    /// Short name, e.g. `"int"` or `"Sequence"`.
    pub const fn short_name(&self) -> &'static str {
        self.ty.short_name()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup of type descriptors by name or tag.
///
/// The registry is a fixed table; it holds no state.
#[derive(Copy, Clone, Debug, Default)]
pub struct TypeRegistry;

impl TypeRegistry {
    /// Find the type for `name`, or `None` if the name is unknown.
    ///
    /// Surrounding whitespace and a leading `::` are ignored.
    pub fn by_name(name: &str) -> Option<TypeDescriptor> {
        let name = name.trim();
        let name = name.strip_prefix("::").unwrap_or(name);
        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, ty)| TypeDescriptor { ty })
    }

    pub const fn by_type(ty: Type) -> TypeDescriptor {
        TypeDescriptor { ty }
    }
}
