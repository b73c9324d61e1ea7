//! An in-memory key/value cache with a completeness flag.
//!
//! Keys are sanitized before use: integers are kept, strings are trimmed and
//! become integer keys when they spell an integer. The completeness flag lets
//! a caller that fills the cache incrementally record that every item is
//! present, so later lookups can skip the source.
//!
//! ```
//! use coffer_cache::MemoryCache;
//! use coffer_values::Key;
//!
//! let mut cache = MemoryCache::new();
//! assert_eq!(cache.add(" 42 ", "answer"), Ok(Key::Int(42)));
//! assert!(cache.is_set(42));
//! assert_eq!(cache.get("42"), Some(&"answer"));
//!
//! assert!(!cache.is_complete());
//! cache.mark_complete();
//! assert!(cache.is_complete());
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;

use coffer_values::{Key, Value};
use hashbrown::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CacheError {
    #[error("{key:?} cannot be used as a cache key")]
    InvalidKey { key: Value },

    #[error("cache key {key} is already set")]
    AlreadySet { key: Key },
}

/// A cache of `V` values addressed by sanitized keys.
#[derive(Debug, Clone)]
pub struct MemoryCache<V> {
    items: HashMap<Key, V>,
    complete: bool,
}

impl<V> MemoryCache<V> {
    /// An empty, incomplete cache.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            complete: false,
        }
    }

    /// A cache holding `items`, marked complete if `mark_complete` is set.
    pub fn with_items<K: Into<Value>>(
        items: impl IntoIterator<Item = (K, V)>,
        mark_complete: bool,
    ) -> Result<Self, CacheError> {
        let mut cache = Self::new();
        cache.set(items, mark_complete)?;
        Ok(cache)
    }

    /// Store `value` at `key` unless the key is already set. Returns the
    /// sanitized key.
    pub fn add(&mut self, key: impl Into<Value>, value: V) -> Result<Key, CacheError> {
        let key = sanitized(key.into())?;
        if self.items.contains_key(&key) {
            tracing::debug!(%key, "cache key already set");
            return Err(CacheError::AlreadySet { key });
        }
        self.items.insert(key.clone(), value);
        Ok(key)
    }

    /// Store `value` at `key`, replacing any previous value. Returns the
    /// sanitized key.
    pub fn update(&mut self, key: impl Into<Value>, value: V) -> Result<Key, CacheError> {
        let key = sanitized(key.into())?;
        self.items.insert(key.clone(), value);
        Ok(key)
    }

    /// Replace every item with `items`, then set the completeness flag.
    ///
    /// If any key is invalid the cache is left as it was.
    pub fn set<K: Into<Value>>(
        &mut self,
        items: impl IntoIterator<Item = (K, V)>,
        mark_complete: bool,
    ) -> Result<(), CacheError> {
        let items = items
            .into_iter()
            .map(|(key, value)| Ok((sanitized(key.into())?, value)))
            .collect::<Result<HashMap<_, _>, CacheError>>()?;
        self.items = items;
        self.complete = mark_complete;
        Ok(())
    }

    /// Whether `key` sanitizes to a key that holds a value.
    pub fn is_set(&self, key: impl Into<Value>) -> bool {
        sanitize_key(&key.into()).is_some_and(|key| self.items.contains_key(&key))
    }

    pub fn get(&self, key: impl Into<Value>) -> Option<&V> {
        self.items.get(&sanitize_key(&key.into())?)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn mark_complete(&mut self) {
        self.complete = true;
    }

    pub fn mark_incomplete(&mut self) {
        self.complete = false;
    }
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// The key `key` is stored under, or `None` if it can't be a key.
///
/// Integers are kept as is. Strings are trimmed; the empty string is invalid,
/// and a string that parses as an `i64` becomes an integer key. Any other
/// value is invalid.
pub fn sanitize_key(key: &Value) -> Option<Key> {
    match key {
        Value::Int(n) => Some(Key::Int(*n)),
        Value::Str(s) => match s.trim() {
            "" => None,
            trimmed => Some(
                trimmed
                    .parse()
                    .map_or_else(|_| Key::Str(String::from(trimmed)), Key::Int),
            ),
        },
        _ => None,
    }
}

fn sanitized(key: Value) -> Result<Key, CacheError> {
    match sanitize_key(&key) {
        Some(key) => Ok(key),
        None => {
            tracing::warn!(?key, "rejecting invalid cache key");
            Err(CacheError::InvalidKey { key })
        }
    }
}
