use coffer_values::Element;

use crate::{Cursor, Sequence};

/// Read access shared by every collection and every read-only view.
///
/// Results are returned by value so that views over shared handles can
/// implement the trait without lending references into the backing
/// collection. The collections themselves also offer borrowing accessors.
///
/// Positions count entries in iteration order: index order for sequences,
/// insertion order for dictionaries.
pub trait ReadOnlyCollection {
    type Key: Element;
    type Value: Element;

    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether `key` exists. Never fails: wrong-typed keys simply don't exist.
    fn has_key(&self, key: &Self::Key) -> bool;

    /// The entry at `position`, or `None` past the end.
    fn entry(&self, position: usize) -> Option<(Self::Key, Self::Value)>;

    /// Soft lookup: the value at `key`, or `None` if it does not exist.
    fn lookup(&self, key: &Self::Key) -> Option<Self::Value>;

    /// All keys, in iteration order.
    fn keys(&self) -> Sequence<Self::Key>;

    /// All values, in iteration order.
    fn values(&self) -> Sequence<Self::Value>;

    fn is_of_key_type(&self, key: &Self::Key) -> bool;

    fn is_of_value_type(&self, value: &Self::Value) -> bool;

    /// Visit every entry in order, stopping at the first `Some`.
    ///
    /// The first `Some` returned by `f` becomes the result; `None` means the
    /// traversal ran to completion. Mutable context is carried by the
    /// closure's captures.
    ///
    /// ```
    /// use coffer_collections::{ReadOnlyCollection, seq};
    ///
    /// let numbers = seq![3i64, 8, 12, 5];
    /// let mut visited = 0;
    /// let first_even = numbers.for_each_entry(|index, value| {
    ///     visited += 1;
    ///     (value % 2 == 0).then_some(index)
    /// });
    /// assert_eq!(first_even, Some(1));
    /// assert_eq!(visited, 2);
    /// ```
    fn for_each_entry<R, F>(&self, f: F) -> Option<R>
    where
        F: FnMut(Self::Key, &Self::Value) -> Option<R>;

    /// A cursor positioned at the first entry.
    fn cursor(&self) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }
}
