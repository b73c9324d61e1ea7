//! Mutable maps from typed keys to typed values.

use core::mem;

use coffer_types::{KeyType, Type, TypeConstraint, TypeRegistry};
use coffer_values::{Element, KeyElement, StaticKey};
use hashbrown::HashMap;

use crate::check::{check_key, check_value, default_constraint, resolve_key, resolve_value};
use crate::error::{CollectionError, InvalidArgument, Result, reject};
use crate::{ReadOnlyCollection, ReadOnlyDictionary, Sequence, SequenceOptions};

/// A mutable map from keys to values, iterated in insertion order.
///
/// Keys are either all integers or all strings. Values satisfy the value
/// constraint declared at construction. All writes go through [`set`], which
/// validates both sides before committing anything.
///
/// [`set`]: Dictionary::set
///
/// # Example
///
/// ```
/// use coffer_collections::{Dictionary, ErrorKind};
///
/// let mut dict = Dictionary::<String, i64>::new();
/// dict.set("a".into(), 1).unwrap();
/// dict.set("a".into(), 2).unwrap();
/// assert_eq!(dict.get(&"a".into()), Ok(&2));
///
/// let err = dict.add("a".into(), 3).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DuplicateKey);
/// assert_eq!(dict.get(&"a".into()), Ok(&2));
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary<K, V> {
    entries: Vec<(K, V)>,
    /// Slot of every key in `entries`.
    slots: HashMap<K, usize>,
    key_type: KeyType,
    value_constraint: TypeConstraint,
}

impl<K: StaticKey, V: Element> Dictionary<K, V> {
    /// Create an empty dictionary keyed by `K` and constrained to `V`'s type.
    pub fn new() -> Self {
        Self::from_parts(K::KEY_TYPE, default_constraint::<V>())
    }
}

impl<K: StaticKey, V: Element> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyElement, V: Element> Dictionary<K, V> {
    /// Create an empty dictionary with explicit constraints.
    ///
    /// Fails with `InvalidArgument` if either constraint contradicts the
    /// static type of `K` or `V`, or if values are declared null.
    pub fn with_constraints(key_type: KeyType, value_constraint: TypeConstraint) -> Result<Self> {
        if value_constraint == TypeConstraint::Exactly(Type::Null) {
            return Err(InvalidArgument::NullValueType.into());
        }
        let key_type = resolve_key::<K>(key_type)?;
        let value_constraint = resolve_value::<V>(value_constraint)?;
        tracing::debug!(%key_type, %value_constraint, "creating dictionary");
        Ok(Self::from_parts(key_type, value_constraint))
    }

    /// Create an empty dictionary from type names.
    ///
    /// The key name must resolve to `integer` or `string`. The value name may
    /// be empty, meaning any value, but may not be `null`.
    ///
    /// ```
    /// use coffer_collections::Dictionary;
    /// use coffer_values::{Key, Value};
    ///
    /// let dict = Dictionary::<Key, Value>::from_type_names("int", "").unwrap();
    /// assert!(dict.is_of_key_type(&Key::Int(1)));
    /// assert!(!dict.is_of_key_type(&Key::from("a")));
    ///
    /// assert!(Dictionary::<Key, Value>::from_type_names("", "").is_err());
    /// assert!(Dictionary::<Key, Value>::from_type_names("float", "").is_err());
    /// assert!(Dictionary::<Key, Value>::from_type_names("string", "NULL").is_err());
    /// ```
    pub fn from_type_names(key: &str, value: &str) -> Result<Self> {
        let key_type = TypeRegistry::by_name(key)
            .and_then(|descriptor| descriptor.ty().as_key_type())
            .ok_or_else(|| InvalidArgument::UnsupportedKeyType { name: key.into() })?;
        Self::with_constraints(key_type, TypeConstraint::parse(value)?)
    }

    fn from_parts(key_type: KeyType, value_constraint: TypeConstraint) -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
            key_type,
            value_constraint,
        }
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Store a new entry. Fails with `DuplicateKey` if `key` already exists.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        if self.has_key(&key) {
            return reject(CollectionError::DuplicateKey { key: key.to_key() });
        }
        self.set(key, value).map(|_| ())
    }

    /// Replace the value of an existing entry, returning the previous value.
    /// Fails with `KeyNotFound` if `key` does not exist.
    pub fn update(&mut self, key: K, value: V) -> Result<V> {
        let Some(&slot) = self.slots.get(&key) else {
            return reject(CollectionError::KeyNotFound { key: key.to_key() });
        };
        if let Err(err) = check_value(self.value_constraint, &value) {
            return reject(err);
        }
        Ok(mem::replace(&mut self.entries[slot].1, value))
    }

    /// Store or overwrite the entry at `key`, returning the previous value.
    ///
    /// The key type is checked first, then the value type; on either mismatch
    /// nothing is stored.
    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>> {
        if let Err(err) = check_key(self.key_type, &key)
            .and_then(|()| check_value(self.value_constraint, &value))
        {
            return reject(err);
        }
        match self.slots.get(&key) {
            Some(&slot) => Ok(Some(mem::replace(&mut self.entries[slot].1, value))),
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                Ok(None)
            }
        }
    }

    /// Remove the entry at `key`, returning its value.
    ///
    /// The remaining entries keep their relative order.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        if let Err(err) = check_key(self.key_type, key) {
            return reject(err);
        }
        let Some(slot) = self.slots.remove(key) else {
            return reject(CollectionError::KeyNotFound { key: key.to_key() });
        };
        let (_, value) = self.entries.remove(slot);
        for (moved, _) in &self.entries[slot..] {
            if let Some(index) = self.slots.get_mut(moved) {
                *index -= 1;
            }
        }
        Ok(value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }

    // -------------------------------------------------------------------------
    // Reading
    // -------------------------------------------------------------------------

    /// The value at `key`.
    ///
    /// Unlike [`Sequence::get`], a miss is an error: `TypeMismatch` for a
    /// wrong-typed key, `KeyNotFound` for an absent one.
    pub fn get(&self, key: &K) -> Result<&V> {
        if let Err(err) = check_key(self.key_type, key) {
            return reject(err);
        }
        match self.slots.get(key) {
            Some(&slot) => Ok(&self.entries[slot].1),
            None => reject(CollectionError::KeyNotFound { key: key.to_key() }),
        }
    }

    /// Soft lookup: `None` for absent or wrong-typed keys.
    pub fn find(&self, key: &K) -> Option<&V> {
        self.slots.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn has_key(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn value_constraint(&self) -> TypeConstraint {
        self.value_constraint
    }

    pub fn is_of_key_type(&self, key: &K) -> bool {
        key.key_type() == self.key_type
    }

    pub fn is_of_value_type(&self, value: &V) -> bool {
        self.value_constraint.admits(value.type_of())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// A live read-only view of this dictionary.
    pub fn read_only(&self) -> ReadOnlyDictionary<'_, K, V> {
        ReadOnlyDictionary::borrowed(self)
    }
}

/// Equal when both hold the same entries in the same order under the same
/// constraints.
impl<K: PartialEq, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key_type == other.key_type
            && self.value_constraint == other.value_constraint
            && self.entries == other.entries
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = core::iter::Map<core::slice::Iter<'a, (K, V)>, fn(&'a (K, V)) -> (&'a K, &'a V)>;

    fn into_iter(self) -> Self::IntoIter {
        let split: fn(&'a (K, V)) -> (&'a K, &'a V) = |(key, value)| (key, value);
        self.entries.iter().map(split)
    }
}

impl<K: KeyElement, V: Element> Element for Dictionary<K, V> {
    const STATIC_TYPE: Option<Type> = Some(Type::Dictionary);

    fn type_of(&self) -> Type {
        Type::Dictionary
    }
}

impl<K: KeyElement, V: Element> ReadOnlyCollection for Dictionary<K, V> {
    type Key = K;
    type Value = V;

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn has_key(&self, key: &K) -> bool {
        Dictionary::has_key(self, key)
    }

    fn entry(&self, position: usize) -> Option<(K, V)> {
        self.entries.get(position).cloned()
    }

    fn lookup(&self, key: &K) -> Option<V> {
        self.find(key).cloned()
    }

    fn keys(&self) -> Sequence<K> {
        Sequence::from_parts(
            self.entries.iter().map(|(key, _)| key.clone()).collect(),
            TypeConstraint::Exactly(self.key_type.ty()),
            SequenceOptions::default(),
        )
    }

    fn values(&self) -> Sequence<V> {
        Sequence::from_parts(
            self.entries.iter().map(|(_, value)| value.clone()).collect(),
            self.value_constraint,
            SequenceOptions::default(),
        )
    }

    fn is_of_key_type(&self, key: &K) -> bool {
        Dictionary::is_of_key_type(self, key)
    }

    fn is_of_value_type(&self, value: &V) -> bool {
        Dictionary::is_of_value_type(self, value)
    }

    fn for_each_entry<R, F>(&self, mut f: F) -> Option<R>
    where
        F: FnMut(K, &V) -> Option<R>,
    {
        self.entries
            .iter()
            .find_map(|(key, value)| f(key.clone(), value))
    }
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod dictionary_test;
