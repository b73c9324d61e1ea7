use crate::ReadOnlyCollection;

/// A stateful position over the entries of a collection.
///
/// The cursor reads through [`ReadOnlyCollection::entry`], so it works the
/// same over sequences, dictionaries and views. It is valid while its
/// position references an existing entry.
///
/// ```
/// use coffer_collections::{ReadOnlyCollection, seq};
///
/// let letters = seq![String::from("a"), String::from("b")];
/// let mut cursor = letters.cursor();
/// assert_eq!(cursor.key(), Some(0));
/// assert_eq!(cursor.current().as_deref(), Some("a"));
///
/// cursor.advance();
/// cursor.advance();
/// assert!(!cursor.valid());
///
/// cursor.rewind();
/// assert_eq!(cursor.current().as_deref(), Some("a"));
/// ```
#[derive(Debug)]
pub struct Cursor<'c, C> {
    collection: &'c C,
    position: usize,
}

impl<'c, C: ReadOnlyCollection> Cursor<'c, C> {
    pub fn new(collection: &'c C) -> Self {
        Self {
            collection,
            position: 0,
        }
    }

    /// Value of the current entry.
    pub fn current(&self) -> Option<C::Value> {
        self.collection.entry(self.position).map(|(_, value)| value)
    }

    /// Key of the current entry.
    pub fn key(&self) -> Option<C::Key> {
        self.collection.entry(self.position).map(|(key, _)| key)
    }

    /// Move to the next entry. Advancing past the end is allowed and leaves
    /// the cursor invalid.
    pub fn advance(&mut self) {
        self.position = self.position.saturating_add(1);
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn valid(&self) -> bool {
        self.position < self.collection.count()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl<C> Clone for Cursor<'_, C> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection,
            position: self.position,
        }
    }
}

impl<C: ReadOnlyCollection> Iterator for Cursor<'_, C> {
    type Item = (C::Key, C::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.collection.entry(self.position)?;
        self.advance();
        Some(entry)
    }
}
