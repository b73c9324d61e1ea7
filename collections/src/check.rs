//! Constraint checks shared by every collection.

use coffer_types::{KeyType, TypeConstraint};
use coffer_values::{Element, KeyElement};

use crate::error::{CollectionError, InvalidArgument, Result, Role};

/// Combine a requested value constraint with the element's static type.
///
/// A dynamic element keeps the requested constraint as long as some value can
/// satisfy it. A static element narrows `Any` to its own type and rejects any
/// other type.
pub(crate) fn resolve_value<E: Element>(requested: TypeConstraint) -> Result<TypeConstraint> {
    match (E::STATIC_TYPE, requested) {
        (None, TypeConstraint::Exactly(ty)) if !E::can_hold(ty) => {
            Err(InvalidArgument::UnsatisfiableConstraint {
                role: Role::Value,
                requested: ty,
            }
            .into())
        }
        (None, constraint) => Ok(constraint),
        (Some(actual), TypeConstraint::Any) => Ok(TypeConstraint::Exactly(actual)),
        (Some(actual), TypeConstraint::Exactly(ty)) if ty == actual => Ok(requested),
        (Some(actual), requested) => Err(InvalidArgument::ContradictoryConstraint {
            role: Role::Value,
            requested,
            actual,
        }
        .into()),
    }
}

/// Check a requested key type against the key element's static key type.
pub(crate) fn resolve_key<K: KeyElement>(requested: KeyType) -> Result<KeyType> {
    match K::STATIC_KEY_TYPE {
        Some(actual) if actual != requested => Err(InvalidArgument::ContradictoryConstraint {
            role: Role::Key,
            requested: TypeConstraint::Exactly(requested.ty()),
            actual: actual.ty(),
        }
        .into()),
        _ => Ok(requested),
    }
}

/// The constraint of a collection created without an explicit constraint.
pub(crate) const fn default_constraint<E: Element>() -> TypeConstraint {
    match E::STATIC_TYPE {
        Some(ty) => TypeConstraint::Exactly(ty),
        None => TypeConstraint::Any,
    }
}

pub(crate) fn check_value<E: Element>(constraint: TypeConstraint, value: &E) -> Result<()> {
    let found = value.type_of();
    if constraint.admits(found) {
        Ok(())
    } else {
        Err(CollectionError::TypeMismatch {
            role: Role::Value,
            expected: constraint,
            found,
        })
    }
}

pub(crate) fn check_key<K: KeyElement>(key_type: KeyType, key: &K) -> Result<()> {
    let found = key.key_type();
    if found == key_type {
        Ok(())
    } else {
        Err(CollectionError::TypeMismatch {
            role: Role::Key,
            expected: TypeConstraint::Exactly(key_type.ty()),
            found: found.ty(),
        })
    }
}
