//! Read-only views over collections.
//!
//! A view exposes the read operations of a collection and none of its
//! mutators. Views are live: they read the backing collection on every call,
//! so changes made through the owner are visible through the view.
//!
//! Two backings are provided. A borrowed view (`&C`) lives no longer than the
//! borrow, so the owner cannot change the collection while it exists. A
//! shared view ([`Shared<C>`]) holds a reference-counted handle, so the owner
//! can keep editing through its own handle and the view follows along.
//!
//! ```
//! use std::rc::Rc;
//!
//! use coffer_collections::{ReadOnly, ReadOnlyCollection, seq, share};
//!
//! let owner = share(seq![1i64, 2]);
//! let view = ReadOnly::shared(Rc::clone(&owner));
//!
//! owner.borrow_mut().add(3).unwrap();
//! assert_eq!(view.count(), 3);
//!
//! let frozen = view.clone_view();
//! owner.borrow_mut().add(4).unwrap();
//! assert_eq!(view.count(), 4);
//! assert_eq!(frozen.count(), 3);
//! ```

use core::cell::RefCell;
use core::fmt;
use core::marker::PhantomData;
use std::rc::Rc;

use coffer_types::{KeyType, TypeConstraint};
use coffer_values::{Element, KeyElement};

use crate::error::Result;
use crate::{Dictionary, ReadOnlyCollection, Sequence};

/// A reference-counted handle to a collection that can be edited by its
/// owner while views of it exist.
pub type Shared<C> = Rc<RefCell<C>>;

/// Wrap `collection` in a [`Shared`] handle.
pub fn share<C>(collection: C) -> Shared<C> {
    Rc::new(RefCell::new(collection))
}

/// Something a view can read a collection through.
pub trait Backing<C> {
    fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R;
}

impl<C> Backing<C> for &C {
    fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(self)
    }
}

impl<C> Backing<C> for Shared<C> {
    fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.borrow())
    }
}

/// A read-only view of a collection `C`, read through `B`.
pub struct ReadOnly<C, B> {
    backing: B,
    _collection: PhantomData<fn() -> C>,
}

pub type ReadOnlySequence<'a, T> = ReadOnly<Sequence<T>, &'a Sequence<T>>;
pub type ReadOnlyDictionary<'a, K, V> = ReadOnly<Dictionary<K, V>, &'a Dictionary<K, V>>;
pub type SharedSequence<T> = ReadOnly<Sequence<T>, Shared<Sequence<T>>>;
pub type SharedDictionary<K, V> = ReadOnly<Dictionary<K, V>, Shared<Dictionary<K, V>>>;

impl<'a, C> ReadOnly<C, &'a C> {
    pub fn borrowed(collection: &'a C) -> Self {
        Self {
            backing: collection,
            _collection: PhantomData,
        }
    }
}

impl<C> ReadOnly<C, Shared<C>> {
    pub fn shared(handle: Shared<C>) -> Self {
        Self {
            backing: handle,
            _collection: PhantomData,
        }
    }

    /// A view over a collection that nothing else can reach.
    fn detached(collection: C) -> Self {
        Self::shared(share(collection))
    }
}

impl<C: Clone, B: Backing<C>> ReadOnly<C, B> {
    /// An independent view over a deep copy of the current contents.
    ///
    /// Later changes to the original collection do not show through the
    /// returned view.
    pub fn clone_view(&self) -> ReadOnly<C, Shared<C>> {
        ReadOnly::detached(self.backing.read(C::clone))
    }
}

impl<C, B: Backing<C>> ReadOnly<C, B> {
    /// Run `f` against the backing collection.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        self.backing.read(f)
    }
}

/// Cloning a view shares the backing; see [`ReadOnly::clone_view`] for a copy.
impl<C, B: Clone> Clone for ReadOnly<C, B> {
    fn clone(&self) -> Self {
        Self {
            backing: self.backing.clone(),
            _collection: PhantomData,
        }
    }
}

impl<C: fmt::Debug, B: Backing<C>> fmt::Debug for ReadOnly<C, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.backing
            .read(|collection| f.debug_tuple("ReadOnly").field(collection).finish())
    }
}

impl<C: ReadOnlyCollection, B: Backing<C>> ReadOnlyCollection for ReadOnly<C, B> {
    type Key = C::Key;
    type Value = C::Value;

    fn count(&self) -> usize {
        self.backing.read(C::count)
    }

    fn has_key(&self, key: &C::Key) -> bool {
        self.backing.read(|c| c.has_key(key))
    }

    fn entry(&self, position: usize) -> Option<(C::Key, C::Value)> {
        self.backing.read(|c| c.entry(position))
    }

    fn lookup(&self, key: &C::Key) -> Option<C::Value> {
        self.backing.read(|c| c.lookup(key))
    }

    fn keys(&self) -> Sequence<C::Key> {
        self.backing.read(C::keys)
    }

    fn values(&self) -> Sequence<C::Value> {
        self.backing.read(C::values)
    }

    fn is_of_key_type(&self, key: &C::Key) -> bool {
        self.backing.read(|c| c.is_of_key_type(key))
    }

    fn is_of_value_type(&self, value: &C::Value) -> bool {
        self.backing.read(|c| c.is_of_value_type(value))
    }

    fn for_each_entry<R, F>(&self, f: F) -> Option<R>
    where
        F: FnMut(C::Key, &C::Value) -> Option<R>,
    {
        self.backing.read(|c| c.for_each_entry(f))
    }
}

// =============================================================================
// Sequence views
// =============================================================================

impl<T: Element, B: Backing<Sequence<T>>> ReadOnly<Sequence<T>, B> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.backing.read(|seq| seq.get(index).cloned())
    }

    pub fn get_or(&self, index: usize, default: T) -> T {
        self.get(index).unwrap_or(default)
    }

    pub fn has_index(&self, index: usize) -> bool {
        self.backing.read(|seq| seq.has_index(index))
    }

    pub fn first_index(&self) -> Option<usize> {
        self.backing.read(Sequence::first_index)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.backing.read(Sequence::last_index)
    }

    pub fn indices(&self) -> Sequence<usize> {
        self.backing.read(Sequence::indices)
    }

    pub fn constraint(&self) -> TypeConstraint {
        self.backing.read(Sequence::constraint)
    }

    /// See [`Sequence::index_of`].
    pub fn index_of(&self, value: &T, offset: usize, reverse: bool) -> Option<usize> {
        self.backing.read(|seq| seq.index_of(value, offset, reverse))
    }

    /// See [`Sequence::slice`]. The copy is returned as a read-only view.
    pub fn slice(&self, start: usize, end: usize) -> Result<SharedSequence<T>> {
        self.backing
            .read(|seq| seq.slice(start, end))
            .map(ReadOnly::detached)
    }

    /// See [`Sequence::split`]. The outer sequence is returned as a read-only
    /// view; the groups inside it are plain copies.
    pub fn split(&self, delimiter: &T, limit: Option<usize>) -> SharedSequence<Sequence<T>> {
        ReadOnly::detached(self.backing.read(|seq| seq.split(delimiter, limit)))
    }

    pub fn reversed(&self) -> SharedSequence<T> {
        ReadOnly::detached(self.backing.read(Sequence::reversed))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.backing.read(Sequence::to_vec)
    }
}

// =============================================================================
// Dictionary views
// =============================================================================

impl<K: KeyElement, V: Element, B: Backing<Dictionary<K, V>>> ReadOnly<Dictionary<K, V>, B> {
    /// See [`Dictionary::get`].
    pub fn get(&self, key: &K) -> Result<V> {
        self.backing.read(|dict| dict.get(key).cloned())
    }

    pub fn find(&self, key: &K) -> Option<V> {
        self.backing.read(|dict| dict.find(key).cloned())
    }

    pub fn key_type(&self) -> KeyType {
        self.backing.read(Dictionary::key_type)
    }

    pub fn value_constraint(&self) -> TypeConstraint {
        self.backing.read(Dictionary::value_constraint)
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
