//! Mutable builder for [`BuiltMap`].
//!
//! # Builder-Built Pattern
//!
//! A [`MapBuilder`] seeded from a built map shares that map's storage until
//! its first write. [`MapBuilder::build`] hands out a new immutable instance
//! that again shares the builder's storage; the next write to the builder
//! copies, so instances already built never observe later changes.
//!
//! Building twice without an intervening write returns the same instance.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::trace;

use super::{BuiltMap, ReferenceCounter};

/// A mutable map used to create [`BuiltMap`] instances.
///
/// # Design
///
/// - Storage is shared with the seeding map and with built instances, and
///   copied lazily on the first write after either
/// - `PhantomData<Rc<()>>` ensures `!Send` and `!Sync`: a builder belongs to
///   one owner for the whole mutation sequence
/// - Not `Clone`
///
/// # Examples
///
/// ```rust
/// use built_collection::built::{BuiltMap, MapBuilder};
///
/// let mut builder = MapBuilder::new();
/// builder.insert("a", 1);
/// builder.insert("b", 2);
/// builder.remove("a");
///
/// let map: BuiltMap<&str, i32> = builder.build();
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("b"), Some(&2));
/// ```
///
/// ```rust
/// use built_collection::built::BuiltMap;
///
/// let map: BuiltMap<&str, i32> = [("a", 1)].into();
///
/// let mut builder = map.to_builder();
/// builder.insert("b", 2);
/// let updated = builder.build();
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(updated.len(), 2);
/// ```
pub struct MapBuilder<K, V> {
    map: ReferenceCounter<IndexMap<K, V>>,
    /// The instance `map` currently represents, if no write happened since.
    built: Option<BuiltMap<K, V>>,
    /// Marker to ensure `!Send` and `!Sync`.
    _marker: PhantomData<Rc<()>>,
}

// Static assertions to verify MapBuilder is not Send/Sync
static_assertions::assert_not_impl_any!(MapBuilder<i32, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(MapBuilder<String, String>: Send, Sync);

// Arc feature verification: even with Arc, MapBuilder remains !Send/!Sync
#[cfg(feature = "arc")]
mod arc_send_sync_verification_builder {
    use super::MapBuilder;
    use std::sync::Arc;

    static_assertions::assert_not_impl_any!(MapBuilder<Arc<i32>, Arc<String>>: Send, Sync);
}

// =============================================================================
// MapBuilder Implementation
// =============================================================================

impl<K, V> MapBuilder<K, V> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: ReferenceCounter::new(IndexMap::new()),
            built: None,
            _marker: PhantomData,
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the builder contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if the builder contains at least one entry.
    #[inline]
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.map.is_empty()
    }

    /// Borrows the current contents.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &IndexMap<K, V> {
        &self.map
    }

    /// Applies a batch of mutations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::MapBuilder;
    ///
    /// let mut builder = MapBuilder::new();
    /// builder.update(|builder| {
    ///     builder.insert(1, "one");
    ///     builder.insert(2, "two");
    /// });
    /// assert_eq!(builder.len(), 2);
    /// ```
    pub fn update<F>(&mut self, updates: F)
    where
        F: FnOnce(&mut Self),
    {
        updates(self);
    }

    /// Makes the builder represent `map`, sharing its storage.
    pub fn replace_with(&mut self, map: &BuiltMap<K, V>) {
        self.map = ReferenceCounter::clone(map.shared_entries());
        self.built = Some(map.clone());
    }
}

impl<K: Hash + Eq, V> MapBuilder<K, V> {
    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Returns `true` if the builder contains a value for the key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }
}

impl<K: Clone + Hash + Eq, V: Clone> MapBuilder<K, V> {
    /// Returns storage safe to mutate, copying it if it is shared.
    fn storage_mut(&mut self) -> &mut IndexMap<K, V> {
        self.built = None;
        ReferenceCounter::make_mut(&mut self.map)
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// A new key goes to the end; an existing key keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.storage_mut().insert(key, value)
    }

    /// Inserts every pair of `entries`, later pairs overwriting earlier ones.
    pub fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.storage_mut().extend(entries);
    }

    /// Inserts one entry per element, deriving its key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::MapBuilder;
    ///
    /// let mut builder = MapBuilder::new();
    /// builder.insert_iterable(["apple", "kiwi"], |word| word.len(), |word| word.to_uppercase());
    ///
    /// assert_eq!(builder.get(&4).map(String::as_str), Some("KIWI"));
    /// ```
    pub fn insert_iterable<I, T, FK, FV>(&mut self, elements: I, mut key: FK, mut value: FV)
    where
        I: IntoIterator<Item = T>,
        FK: FnMut(&T) -> K,
        FV: FnMut(&T) -> V,
    {
        let storage = self.storage_mut();
        for element in elements {
            storage.insert(key(&element), value(&element));
        }
    }

    /// Returns the value for `key`, inserting `if_absent()` first if needed.
    pub fn put_if_absent<F>(&mut self, key: K, if_absent: F) -> &V
    where
        F: FnOnce() -> V,
    {
        if self.map.contains_key(&key) {
            return &self.map[&key];
        }
        self.storage_mut().entry(key).or_insert_with(if_absent)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.map.contains_key(key) {
            return None;
        }
        self.storage_mut().shift_remove(key)
    }

    /// Removes every entry for which `predicate` returns `true`.
    pub fn remove_where<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        if self.map.iter().any(|(key, value)| predicate(key, value)) {
            self.storage_mut().retain(|key, value| !predicate(key, &*value));
        }
    }

    /// Updates the value for `key` in place.
    ///
    /// Returns `false`, leaving the builder untouched, if the key is absent.
    pub fn update_value<Q, F>(&mut self, key: &Q, update: F) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce(&mut V),
    {
        if !self.map.contains_key(key) {
            return false;
        }
        self.storage_mut().get_mut(key).map(update).is_some()
    }

    /// Updates the value for `key` in place, inserting `if_absent()` when the
    /// key is missing.
    pub fn update_value_or_insert<F, D>(&mut self, key: K, update: F, if_absent: D)
    where
        F: FnOnce(&mut V),
        D: FnOnce() -> V,
    {
        self.storage_mut()
            .entry(key)
            .and_modify(update)
            .or_insert_with(if_absent);
    }

    /// Updates every value in place.
    pub fn update_all_values<F>(&mut self, mut update: F)
    where
        F: FnMut(&K, &mut V),
    {
        for (key, value) in self.storage_mut().iter_mut() {
            update(key, value);
        }
    }

    /// Replaces the whole contents with `entries`.
    pub fn replace<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.map = ReferenceCounter::new(entries.into_iter().collect());
        self.built = None;
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.map = ReferenceCounter::new(IndexMap::new());
        self.built = None;
    }

    /// Returns a built map with the current contents.
    ///
    /// Returns the previously built (or seeding) instance when nothing was
    /// written since. The builder remains usable afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::MapBuilder;
    ///
    /// let mut builder = MapBuilder::new();
    /// builder.insert("a", 1);
    ///
    /// let first = builder.build();
    /// let second = builder.build();
    /// assert!(first.ptr_eq(&second));
    ///
    /// builder.insert("b", 2);
    /// let third = builder.build();
    /// assert_eq!(first.len(), 1);
    /// assert_eq!(third.len(), 2);
    /// ```
    #[must_use]
    pub fn build(&mut self) -> BuiltMap<K, V> {
        if let Some(built) = &self.built {
            trace!(len = built.len(), "map builder returning unchanged instance");
            return built.clone();
        }
        trace!(len = self.map.len(), "map builder creating new instance");
        let built = BuiltMap::from_shared(ReferenceCounter::clone(&self.map));
        self.built = Some(built.clone());
        built
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for MapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<&BuiltMap<K, V>> for MapBuilder<K, V> {
    fn from(map: &BuiltMap<K, V>) -> Self {
        let mut builder = Self::new();
        builder.replace_with(map);
        builder
    }
}

impl<K: Clone + Hash + Eq, V: Clone> Extend<(K, V)> for MapBuilder<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<K: Clone + Hash + Eq, V: Clone> FromIterator<(K, V)> for MapBuilder<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.replace(iter);
        builder
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapBuilder<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapBuilder")
            .field("map", &*self.map)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
