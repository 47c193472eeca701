//! Copy-on-write map view.
//!
//! This module provides [`CopyOnWriteMap`], the mutable map returned by
//! [`BuiltMap::to_map`](super::BuiltMap::to_map).
//!
//! # Overview
//!
//! The view starts out sharing the backing storage of the map it was exported
//! from. Reads go straight to that shared storage. The first mutating call
//! replaces it with a private copy, and every later call works on that copy.
//!
//! | Operation               | Before first write | After first write |
//! |-------------------------|--------------------|-------------------|
//! | `wrap` / `to_map`       | O(1)               | -                 |
//! | `get`, `contains_key`   | O(1)               | O(1)              |
//! | first mutation          | O(N) copy          | -                 |
//! | later mutations         | -                  | as `IndexMap`     |

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::trace;

use super::ReferenceCounter;

/// A mutable map that defers copying its storage until the first write.
///
/// Cloning a `CopyOnWriteMap` is O(1): the clone shares the current storage
/// and makes its own copy when it is first written to.
///
/// # Examples
///
/// ```rust
/// use built_collection::built::BuiltMap;
///
/// let map: BuiltMap<String, i32> = [("a".to_string(), 1)].into();
///
/// let mut view = map.to_map();
/// assert_eq!(view.get("a"), Some(&1));
/// assert!(!view.is_copied());
///
/// view.insert("b".to_string(), 2);
/// assert!(view.is_copied());
/// assert_eq!(view.len(), 2);
///
/// // The built map is unaffected
/// assert_eq!(map.len(), 1);
/// ```
pub struct CopyOnWriteMap<K, V> {
    map: ReferenceCounter<IndexMap<K, V>>,
    copied: bool,
}

impl<K, V> CopyOnWriteMap<K, V> {
    /// Wraps shared storage without copying it.
    #[inline]
    #[must_use]
    pub const fn wrap(map: ReferenceCounter<IndexMap<K, V>>) -> Self {
        Self { map, copied: false }
    }

    /// Returns `true` once this view has made its private copy.
    #[inline]
    #[must_use]
    pub const fn is_copied(&self) -> bool {
        self.copied
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the view contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Borrows the current storage.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &IndexMap<K, V> {
        &self.map
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.map.iter()
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.map.keys()
    }

    /// Iterates over the values in order.
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.map.values()
    }
}

impl<K: Hash + Eq, V> CopyOnWriteMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Returns `true` if the view contains a value for the key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.map.values().any(|candidate| candidate == value)
    }
}

impl<K: Clone + Hash + Eq, V: Clone> CopyOnWriteMap<K, V> {
    /// Returns the private storage, copying the shared storage on first use.
    fn storage_mut(&mut self) -> &mut IndexMap<K, V> {
        if !self.copied {
            trace!(len = self.map.len(), "copy-on-write map copying shared storage");
            self.map = ReferenceCounter::new(IndexMap::clone(&self.map));
            self.copied = true;
        }
        ReferenceCounter::make_mut(&mut self.map)
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// A new key goes to the end; an existing key keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.storage_mut().insert(key, value)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage_mut().shift_remove(key)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.storage_mut().clear();
    }

    /// Keeps only the entries for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.storage_mut().retain(predicate);
    }

    /// Returns a mutable reference to the value for the key.
    ///
    /// This counts as a write even when the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage_mut().get_mut(key)
    }

    /// Returns the value for `key`, inserting `default()` first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.storage_mut().entry(key).or_insert_with(default)
    }

    /// Consumes the view and returns an owned map.
    ///
    /// Copies only if the storage is still shared.
    #[must_use]
    pub fn into_map(self) -> IndexMap<K, V> {
        ReferenceCounter::try_unwrap(self.map).unwrap_or_else(|shared| IndexMap::clone(&shared))
    }
}

impl<K: Clone + Hash + Eq, V: Clone> Extend<(K, V)> for CopyOnWriteMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.storage_mut().extend(iter);
    }
}

impl<K, V> Clone for CopyOnWriteMap<K, V> {
    fn clone(&self) -> Self {
        Self::wrap(ReferenceCounter::clone(&self.map))
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for CopyOnWriteMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.map, &other.map) || self.map == other.map
    }
}

impl<K: Hash + Eq, V: Eq> Eq for CopyOnWriteMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CopyOnWriteMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.map.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a CopyOnWriteMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
