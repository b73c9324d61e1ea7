//! Mutable, ordered lists of values.

use coffer_types::{Type, TypeConstraint};
use coffer_values::Element;

use crate::check::{check_value, default_constraint, resolve_value};
use crate::error::{InvalidArgument, Result, reject};
use crate::{BoundsPolicy, ReadOnlyCollection, ReadOnlySequence, SequenceOptions};

/// A mutable, ordered list of values indexed `0..count`.
///
/// Indices are always contiguous: removing a slot shifts every following slot
/// down by one. Every stored value satisfies the sequence's constraint, which
/// is fixed at construction.
///
/// # Example
///
/// ```
/// use coffer_collections::Sequence;
///
/// let mut seq = Sequence::<i64>::new();
/// seq.insert(0, 5).unwrap();
/// seq.insert(1, 6).unwrap();
/// seq.insert(1, 99).unwrap();
/// assert_eq!(seq.as_slice(), &[5, 99, 6]);
///
/// let groups = seq.split(&99, None);
/// assert_eq!(groups.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    items: Vec<T>,
    constraint: TypeConstraint,
    options: SequenceOptions,
}

impl<T: Element> Sequence<T> {
    /// Create an empty sequence constrained to `T`'s own type.
    ///
    /// For the dynamic [`Value`](coffer_values::Value) element this is an
    /// unconstrained sequence.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), default_constraint::<T>(), SequenceOptions::default())
    }

    /// Create an empty sequence restricted to `constraint`.
    ///
    /// Fails with `InvalidArgument` if `constraint` names a type that `T` can
    /// never have.
    pub fn with_constraint(constraint: TypeConstraint) -> Result<Self> {
        Self::with_options(constraint, SequenceOptions::default())
    }

    pub fn with_options(constraint: TypeConstraint, options: SequenceOptions) -> Result<Self> {
        let constraint = resolve_value::<T>(constraint)?;
        tracing::debug!(%constraint, ?options, "creating sequence");
        Ok(Self::from_parts(Vec::new(), constraint, options))
    }

    /// Create an empty sequence from a type name, e.g. `"int"`, or `""` for
    /// no constraint.
    pub fn from_type_name(name: &str) -> Result<Self> {
        Self::with_constraint(TypeConstraint::parse(name)?)
    }

    /// Create a sequence restricted to `constraint` holding `values`.
    ///
    /// Fails on the first value that does not satisfy the constraint.
    pub fn with_values(
        constraint: TypeConstraint,
        values: impl IntoIterator<Item = T>,
    ) -> Result<Self> {
        let mut seq = Self::with_constraint(constraint)?;
        for value in values {
            seq.add(value)?;
        }
        Ok(seq)
    }

    /// Internal: assemble a sequence whose items are known to satisfy
    /// `constraint`.
    pub(crate) fn from_parts(
        items: Vec<T>,
        constraint: TypeConstraint,
        options: SequenceOptions,
    ) -> Self {
        debug_assert!(items.iter().all(|item| constraint.admits(item.type_of())));
        Self {
            items,
            constraint,
            options,
        }
    }

    /// A sequence with the same constraint and options holding `items`.
    fn derive(&self, items: Vec<T>) -> Self {
        Self::from_parts(items, self.constraint, self.options)
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Append `value`, returning its index.
    pub fn add(&mut self, value: T) -> Result<usize> {
        if let Err(err) = check_value(self.constraint, &value) {
            return reject(err);
        }
        self.items.push(value);
        Ok(self.items.len() - 1)
    }

    /// Insert `value` at `index`, shifting the following slots up.
    ///
    /// `index` may equal the count, which appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize> {
        let len = self.items.len();
        if len < index {
            return reject(InvalidArgument::IndexOutOfRange { index, len }.into());
        }
        if let Err(err) = check_value(self.constraint, &value) {
            return reject(err);
        }
        self.items.insert(index, value);
        Ok(index)
    }

    /// Replace the value at `index`, returning the previous value.
    pub fn update(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.items.len();
        let Some(slot) = self.items.get_mut(index) else {
            return reject(InvalidArgument::IndexOutOfRange { index, len }.into());
        };
        if let Err(err) = check_value(self.constraint, &value) {
            return reject(err);
        }
        Ok(core::mem::replace(slot, value))
    }

    /// Remove the value at `index`, shifting the following slots down.
    ///
    /// A missing index is rejected with `InvalidArgument` and nothing changes.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.items.len();
        if len <= index {
            return reject(InvalidArgument::IndexOutOfRange { index, len }.into());
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Reverse the order of all slots in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    // -------------------------------------------------------------------------
    // Reading
    // -------------------------------------------------------------------------

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The value at `index`, or `default` if there is none.
    pub fn get_or<'a>(&'a self, index: usize, default: &'a T) -> &'a T {
        self.items.get(index).unwrap_or(default)
    }

    pub fn has_index(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Index of the first slot, `None` when empty.
    pub fn first_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(0)
    }

    /// Index of the last slot, `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    pub fn constraint(&self) -> TypeConstraint {
        self.constraint
    }

    pub fn options(&self) -> SequenceOptions {
        self.options
    }

    pub fn is_of_value_type(&self, value: &T) -> bool {
        self.constraint.admits(value.type_of())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// A live read-only view of this sequence.
    pub fn read_only(&self) -> ReadOnlySequence<'_, T> {
        ReadOnlySequence::borrowed(self)
    }

    // -------------------------------------------------------------------------
    // Searching and slicing
    // -------------------------------------------------------------------------

    /// Find `value` in the index range `[offset, count - 1]`.
    ///
    /// A forward search returns the first match at or after `offset`. A
    /// reverse search scans the same range from its end toward `offset` and
    /// returns the last match. Either way the result is a forward index.
    ///
    /// Returns `None` if there is no match, or if `offset` is not an index of
    /// this sequence.
    ///
    /// ```
    /// use coffer_collections::seq;
    ///
    /// let seq = seq![1i64, 7, 3, 7, 5];
    /// assert_eq!(seq.index_of(&7, 0, false), Some(1));
    /// assert_eq!(seq.index_of(&7, 0, true), Some(3));
    /// assert_eq!(seq.index_of(&7, 2, false), Some(3));
    /// assert_eq!(seq.index_of(&1, 1, true), None);
    /// ```
    pub fn index_of(&self, value: &T, offset: usize, reverse: bool) -> Option<usize> {
        let Some(range) = self.items.get(offset..).filter(|range| !range.is_empty()) else {
            tracing::warn!(offset, len = self.items.len(), "search offset is not an index");
            return None;
        };
        let found = if reverse {
            range.iter().rposition(|item| item == value)
        } else {
            range.iter().position(|item| item == value)
        };
        found.map(|position| position + offset)
    }

    /// Copy the slots in the inclusive range `[start, end]` into a new
    /// sequence with the same constraint and options.
    ///
    /// `end < start` is rejected. An `end` past the last index is clamped
    /// (with a warning) under [`BoundsPolicy::Clamp`] and rejected under
    /// [`BoundsPolicy::Strict`]; a `start` past the last index yields an empty
    /// sequence when clamping.
    ///
    /// ```
    /// use coffer_collections::seq;
    ///
    /// let seq = seq!['a'.to_string(), 'b'.to_string(), 'c'.to_string(), 'd'.to_string()];
    /// let head = seq.slice(0, 2).unwrap();
    /// assert_eq!(head.as_slice(), &["a", "b", "c"]);
    ///
    /// let tail = seq.slice(2, 100).unwrap();
    /// assert_eq!(tail.as_slice(), &["c", "d"]);
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        if end < start {
            return reject(InvalidArgument::InvertedRange { start, end }.into());
        }
        let len = self.items.len();
        if len <= end {
            match self.options.bounds {
                BoundsPolicy::Strict => {
                    return reject(InvalidArgument::BoundOutOfRange { bound: end, len }.into());
                }
                BoundsPolicy::Clamp => {
                    tracing::warn!(end, len, "clamping slice end to the last index");
                }
            }
        }
        let range = start.min(len)..end.saturating_add(1).min(len);
        Ok(self.derive(self.items[range].to_vec()))
    }

    /// Chop the sequence into groups separated by slots equal to `delimiter`.
    ///
    /// Delimiter slots belong to no group, and empty groups (leading,
    /// trailing or consecutive delimiters) are dropped. At most `limit`
    /// groups are returned; `None` returns them all.
    ///
    /// ```
    /// use coffer_collections::seq;
    ///
    /// let seq = seq![1i64, 0, 2, 0, 0, 3];
    /// let groups = seq.split(&0, None);
    /// let groups: Vec<Vec<i64>> = groups.iter().map(|g| g.to_vec()).collect();
    /// assert_eq!(groups, vec![vec![1], vec![2], vec![3]]);
    ///
    /// assert_eq!(seq.split(&0, Some(2)).count(), 2);
    /// ```
    pub fn split(&self, delimiter: &T, limit: Option<usize>) -> Sequence<Sequence<T>> {
        let groups = self
            .items
            .split(|item| item == delimiter)
            .filter(|group| !group.is_empty())
            .take(limit.unwrap_or(usize::MAX))
            .map(|group| self.derive(group.to_vec()))
            .collect();
        Sequence::from_parts(groups, TypeConstraint::Exactly(Type::Sequence), self.options)
    }

    /// A reversed copy.
    pub fn reversed(&self) -> Self {
        let mut items = self.items.clone();
        items.reverse();
        self.derive(items)
    }

    /// All indices, in order.
    pub fn indices(&self) -> Sequence<usize> {
        (0..self.items.len()).collect()
    }
}

impl<T: Element> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equal when both hold the same values in the same order under the same
/// constraint. Options are not compared.
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.constraint == other.constraint && self.items == other.items
    }
}

/// Collect into a sequence with the default constraint, which every `T`
/// satisfies.
impl<T: Element> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_parts(
            iter.into_iter().collect(),
            default_constraint::<T>(),
            SequenceOptions::default(),
        )
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Element> Element for Sequence<T> {
    const STATIC_TYPE: Option<Type> = Some(Type::Sequence);

    fn type_of(&self) -> Type {
        Type::Sequence
    }
}

impl<T: Element> ReadOnlyCollection for Sequence<T> {
    type Key = usize;
    type Value = T;

    fn count(&self) -> usize {
        self.items.len()
    }

    fn has_key(&self, key: &usize) -> bool {
        self.has_index(*key)
    }

    fn entry(&self, position: usize) -> Option<(usize, T)> {
        self.items.get(position).map(|value| (position, value.clone()))
    }

    fn lookup(&self, key: &usize) -> Option<T> {
        self.items.get(*key).cloned()
    }

    fn keys(&self) -> Sequence<usize> {
        self.indices()
    }

    fn values(&self) -> Sequence<T> {
        self.clone()
    }

    fn is_of_key_type(&self, _key: &usize) -> bool {
        true
    }

    fn is_of_value_type(&self, value: &T) -> bool {
        Sequence::is_of_value_type(self, value)
    }

    fn for_each_entry<R, F>(&self, mut f: F) -> Option<R>
    where
        F: FnMut(usize, &T) -> Option<R>,
    {
        self.items
            .iter()
            .enumerate()
            .find_map(|(index, value)| f(index, value))
    }
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
