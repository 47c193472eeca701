//! Immutable, insertion-ordered map with value semantics.
//!
//! This module provides [`BuiltMap`], a map that can never be mutated once
//! constructed.
//!
//! # Overview
//!
//! - Iteration follows insertion order as seen at construction
//! - Equality and hashing ignore insertion order
//! - The hash code and the key/value slices are computed once, on first use
//! - Cloning is O(1) and yields the same instance
//! - Changes go through [`MapBuilder`], which produces a new instance
//!
//! | Operation        | Complexity            |
//! |------------------|-----------------------|
//! | `get`            | O(1)                  |
//! | `contains_key`   | O(1)                  |
//! | `contains_value` | O(N)                  |
//! | `len`            | O(1)                  |
//! | `hash_code`      | O(N log N) once, O(1) |
//! | `keys`, `values` | O(N) once, O(1)       |
//! | `to_map`         | O(1)                  |
//! | `to_builder`     | O(1)                  |
//!
//! # Examples
//!
//! ```rust
//! use built_collection::built::BuiltMap;
//!
//! let map: BuiltMap<String, i32> = [
//!     ("one".to_string(), 1),
//!     ("two".to_string(), 2),
//! ]
//! .into();
//!
//! assert_eq!(map.get("one"), Some(&1));
//! assert_eq!(map.get("three"), None);
//!
//! // Updates produce a new instance
//! let updated = map.rebuild(|builder| {
//!     builder.insert("three".to_string(), 3);
//! });
//! assert_eq!(map.len(), 2);     // Original unchanged
//! assert_eq!(updated.len(), 3); // New version
//! ```

use std::any::{Any, TypeId, type_name};
use std::borrow::Borrow;
use std::collections::hash_map::{DefaultHasher, RandomState};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Index;
use std::sync::OnceLock;

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::{
    BuiltMapError, CopyOnWriteMap, DynamicMap, ElementRole, MapBuilder, ReferenceCounter,
    Unspecified,
};
use crate::hash::{element_hash, hash_pair, hash_unordered};

// =============================================================================
// BuiltMap Definition
// =============================================================================

/// Shared state of a [`BuiltMap`].
struct Inner<K, V> {
    entries: ReferenceCounter<IndexMap<K, V>>,
    hash_code: OnceLock<u64>,
    keys: OnceLock<Box<[K]>>,
    values: OnceLock<Box<[V]>>,
}

/// An immutable, insertion-ordered map with structural equality.
///
/// The type parameters default to [`Unspecified`]; such a map cannot hold any
/// entry, and [`try_from_source`](Self::try_from_source) rejects it with
/// [`BuiltMapError::MissingTypeParameter`].
///
/// # Examples
///
/// ```rust
/// use built_collection::built::BuiltMap;
///
/// let first: BuiltMap<char, u8> = [('a', 1), ('b', 2)].into();
/// let second: BuiltMap<char, u8> = [('b', 2), ('a', 1)].into();
///
/// assert_eq!(first, second);
/// assert_eq!(first.hash_code(), second.hash_code());
/// assert_eq!(first.keys(), &['a', 'b']);
/// assert_eq!(second.keys(), &['b', 'a']);
/// ```
pub struct BuiltMap<K = Unspecified, V = Unspecified> {
    inner: ReferenceCounter<Inner<K, V>>,
}

// Built maps are shareable across threads with the arc feature
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(BuiltMap<String, i32>: Send, Sync);

impl<K, V> BuiltMap<K, V> {
    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::BuiltMap;
    ///
    /// let map: BuiltMap<String, i32> = BuiltMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_entries(IndexMap::new())
    }

    /// Wraps storage that will never be mutated again.
    fn from_entries(entries: IndexMap<K, V>) -> Self {
        Self::from_shared(ReferenceCounter::new(entries))
    }

    /// Wraps shared storage. Every holder must treat it as read-only.
    pub(crate) fn from_shared(entries: ReferenceCounter<IndexMap<K, V>>) -> Self {
        Self {
            inner: ReferenceCounter::new(Inner {
                entries,
                hash_code: OnceLock::new(),
                keys: OnceLock::new(),
                values: OnceLock::new(),
            }),
        }
    }

    pub(crate) fn shared_entries(&self) -> &ReferenceCounter<IndexMap<K, V>> {
        &self.inner.entries
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Returns `true` if the map contains at least one entry.
    #[inline]
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if both handles refer to the same instance.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.inner, &other.inner)
    }

    /// Borrows the backing map, read-only.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &IndexMap<K, V> {
        &self.inner.entries
    }

    /// Returns an iterator over the entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> BuiltMapIterator<'_, K, V> {
        BuiltMapIterator {
            inner: self.inner.entries.iter(),
        }
    }

    /// Calls `visitor` once per entry, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::BuiltMap;
    ///
    /// let map: BuiltMap<&str, i32> = [("a", 1), ("b", 2)].into();
    /// let mut visited = Vec::new();
    /// map.for_each(|key, value| visited.push(format!("{key}={value}")));
    ///
    /// assert_eq!(visited, vec!["a=1", "b=2"]);
    /// ```
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in self.iter() {
            visitor(key, value);
        }
    }

    /// Returns the first entry in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.inner.entries.first()
    }

    /// Returns the last entry in insertion order.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.inner.entries.last()
    }

    /// Exports the contents as a mutable map without copying.
    ///
    /// The returned view copies the storage on its first write. Nothing done
    /// through the view is visible in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::BuiltMap;
    ///
    /// let map: BuiltMap<&str, i32> = [("a", 1)].into();
    /// let mut view = map.to_map();
    ///
    /// view.insert("a", 100);
    /// assert_eq!(view.get("a"), Some(&100));
    /// assert_eq!(map.get("a"), Some(&1));
    /// ```
    #[must_use]
    pub fn to_map(&self) -> CopyOnWriteMap<K, V> {
        CopyOnWriteMap::wrap(ReferenceCounter::clone(&self.inner.entries))
    }

    /// Returns a builder seeded with this map.
    ///
    /// The builder shares storage with `self` until its first write.
    #[must_use]
    pub fn to_builder(&self) -> MapBuilder<K, V> {
        MapBuilder::from(self)
    }
}

impl<K: Hash + Eq, V> BuiltMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but `Hash` and
    /// `Eq` on the borrowed form must match those for the key type.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.entries.get(key)
    }

    /// Returns the stored key and its value.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.entries.get_key_value(key)
    }

    /// Returns `true` if the map contains a value for the key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.entries.contains_key(key)
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// Scans the values linearly.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.inner.entries.values().any(|candidate| candidate == value)
    }

    /// Creates a new map by transforming every entry.
    ///
    /// When two entries map to the same key, the later value wins and the
    /// earlier position is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::BuiltMap;
    ///
    /// let map: BuiltMap<&str, i32> = [("a", 1), ("b", 2)].into();
    /// let swapped: BuiltMap<i32, String> = map.map_entries(|key, value| (*value, key.to_string()));
    ///
    /// assert_eq!(swapped.get(&2).map(String::as_str), Some("b"));
    /// ```
    #[must_use]
    pub fn map_entries<K2, V2, F>(&self, mut function: F) -> BuiltMap<K2, V2>
    where
        K2: Hash + Eq,
        F: FnMut(&K, &V) -> (K2, V2),
    {
        self.iter().map(|(key, value)| function(key, value)).collect()
    }
}

impl<K: Clone, V> BuiltMap<K, V> {
    /// Returns the keys in insertion order.
    ///
    /// The slice is computed on first call; every later call returns the same
    /// slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::BuiltMap;
    ///
    /// let map: BuiltMap<&str, i32> = [("b", 2), ("a", 1)].into();
    /// assert_eq!(map.keys(), &["b", "a"]);
    /// assert!(std::ptr::eq(map.keys(), map.keys()));
    /// ```
    #[must_use]
    pub fn keys(&self) -> &[K] {
        self.inner
            .keys
            .get_or_init(|| self.inner.entries.keys().cloned().collect())
    }
}

impl<K, V: Clone> BuiltMap<K, V> {
    /// Returns the values in insertion order.
    ///
    /// The slice is computed on first call; every later call returns the same
    /// slice.
    #[must_use]
    pub fn values(&self) -> &[V] {
        self.inner
            .values
            .get_or_init(|| self.inner.entries.values().cloned().collect())
    }
}

impl<K: Clone + Hash + Eq, V: Clone> BuiltMap<K, V> {
    /// Creates a map by applying `updates` to a fresh builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::BuiltMap;
    ///
    /// let map: BuiltMap<&str, i32> = BuiltMap::build(|builder| {
    ///     builder.insert("a", 1);
    ///     builder.insert("b", 2);
    /// });
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn build<F>(updates: F) -> Self
    where
        F: FnOnce(&mut MapBuilder<K, V>),
    {
        let mut builder = MapBuilder::new();
        builder.update(updates);
        builder.build()
    }

    /// Creates a map by applying `updates` to a builder seeded with `self`.
    ///
    /// `self` is never modified. If `updates` changes nothing, `self` is
    /// returned.
    #[must_use]
    pub fn rebuild<F>(&self, updates: F) -> Self
    where
        F: FnOnce(&mut MapBuilder<K, V>),
    {
        let mut builder = self.to_builder();
        builder.update(updates);
        builder.build()
    }
}

// =============================================================================
// Validating Construction
// =============================================================================

impl<K, V> BuiltMap<K, V>
where
    K: Clone + Hash + Eq + Any,
    V: Clone + Any,
{
    /// Creates an empty map, checking that both type parameters are pinned.
    ///
    /// # Errors
    ///
    /// Returns [`BuiltMapError::MissingTypeParameter`] if `K` or `V` is
    /// [`Unspecified`].
    pub fn try_new() -> Result<Self, BuiltMapError> {
        Self::ensure_type_parameters().inspect_err(log_rejection::<()>)?;
        Ok(Self::new())
    }

    /// Creates a map from `source`, validating every element.
    ///
    /// Accepted sources:
    ///
    /// - `BuiltMap<K, V>`: returned as is (the result is the same instance)
    /// - `IndexMap<K, V, S>`, `HashMap<K, V, S>`: copied in their iteration
    ///   order, where `S` is `RandomState` or
    ///   `BuildHasherDefault<DefaultHasher>`, plus `rustc_hash::FxBuildHasher`
    ///   with the `fxhash` feature and `ahash::RandomState` with `ahash`
    /// - `BTreeMap<K, V>`: copied in key order
    /// - [`DynamicMap`]: each key must be a `K` and each value a `V`
    ///
    /// # Errors
    ///
    /// - [`BuiltMapError::MissingTypeParameter`] if `K` or `V` is [`Unspecified`]
    /// - [`BuiltMapError::TypeMismatch`] for the first wrongly typed element of
    ///   a `DynamicMap`
    /// - [`BuiltMapError::InvalidSourceType`] for any other source type
    ///
    /// # Examples
    ///
    /// ```rust
    /// use built_collection::built::{BuiltMap, BuiltMapError};
    ///
    /// let map: BuiltMap<&str, i32> = [("a", 1)].into();
    /// let same = BuiltMap::<&str, i32>::try_from_source(&map).unwrap();
    /// assert!(same.ptr_eq(&map));
    ///
    /// let error = BuiltMap::<&str, i32>::try_from_source(&vec![1, 2]).unwrap_err();
    /// assert!(matches!(error, BuiltMapError::InvalidSourceType { .. }));
    /// ```
    pub fn try_from_source<S: Any>(source: &S) -> Result<Self, BuiltMapError> {
        Self::ensure_type_parameters().inspect_err(log_rejection::<S>)?;

        let source: &dyn Any = source;
        if let Some(existing) = source.downcast_ref::<Self>() {
            trace!(len = existing.len(), "built map source is already built");
            return Ok(existing.clone());
        }
        if let Some(copied) = Self::copied_from_hashed(source) {
            return Ok(copied);
        }
        if let Some(map) = source.downcast_ref::<BTreeMap<K, V>>() {
            return Ok(Self::copied_from(map));
        }
        if let Some(map) = source.downcast_ref::<DynamicMap>() {
            return Self::validated_from(map).inspect_err(log_rejection::<S>);
        }

        let error = BuiltMapError::InvalidSourceType {
            actual: type_name::<S>(),
        };
        log_rejection::<S>(&error);
        Err(error)
    }

    fn ensure_type_parameters() -> Result<(), BuiltMapError> {
        let unspecified = TypeId::of::<Unspecified>();
        let parameter = if TypeId::of::<K>() == unspecified {
            ElementRole::Key
        } else if TypeId::of::<V>() == unspecified {
            ElementRole::Value
        } else {
            return Ok(());
        };
        Err(BuiltMapError::MissingTypeParameter {
            parameter,
            container: type_name::<Self>(),
        })
    }

    /// Copies `source` if it is an `IndexMap` or `HashMap` with one of the
    /// known hasher builders.
    fn copied_from_hashed(source: &dyn Any) -> Option<Self> {
        let copied = Self::copied_from_hashed_with::<RandomState>(source)
            .or_else(|| {
                Self::copied_from_hashed_with::<BuildHasherDefault<DefaultHasher>>(source)
            });
        #[cfg(feature = "fxhash")]
        let copied =
            copied.or_else(|| Self::copied_from_hashed_with::<rustc_hash::FxBuildHasher>(source));
        #[cfg(feature = "ahash")]
        let copied =
            copied.or_else(|| Self::copied_from_hashed_with::<ahash::RandomState>(source));
        copied
    }

    fn copied_from_hashed_with<S: BuildHasher + 'static>(source: &dyn Any) -> Option<Self> {
        if let Some(map) = source.downcast_ref::<IndexMap<K, V, S>>() {
            return Some(Self::copied_from(map));
        }
        if let Some(map) = source.downcast_ref::<HashMap<K, V, S>>() {
            return Some(Self::copied_from(map));
        }
        None
    }

    fn copied_from<'a, I>(source: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: 'a,
        V: 'a,
    {
        let entries: IndexMap<K, V> = source
            .into_iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        trace!(len = entries.len(), "built map copied source");
        Self::from_entries(entries)
    }

    fn validated_from(source: &DynamicMap) -> Result<Self, BuiltMapError> {
        let mut entries = IndexMap::with_capacity(source.len());
        for (position, entry) in source.iter().enumerate() {
            let key = entry
                .key::<K>()
                .ok_or_else(|| BuiltMapError::TypeMismatch {
                    position,
                    role: ElementRole::Key,
                    expected: type_name::<K>(),
                    actual: entry.key_type(),
                })?;
            let value = entry
                .value::<V>()
                .ok_or_else(|| BuiltMapError::TypeMismatch {
                    position,
                    role: ElementRole::Value,
                    expected: type_name::<V>(),
                    actual: entry.value_type(),
                })?;
            entries.insert(key.clone(), value.clone());
        }
        trace!(len = entries.len(), "built map validated dynamic source");
        Ok(Self::from_entries(entries))
    }
}

fn log_rejection<S: ?Sized>(error: &BuiltMapError) {
    debug!(%error, source = type_name::<S>(), "built map construction rejected");
}

// =============================================================================
// Equality & Hashing
// =============================================================================

/// Structural equality with a matching hash code.
///
/// Implementors guarantee that `a.equals(b)` implies
/// `a.hash_code() == b.hash_code()`, and that neither depends on the order
/// in which elements were inserted.
pub trait StructuralEq {
    /// Returns the order-independent hash code of the contents.
    fn hash_code(&self) -> u64;

    /// Returns `true` if `other` is the same kind of collection with equal
    /// contents.
    fn equals(&self, other: &dyn Any) -> bool;
}

impl<K: Hash + Eq, V: Hash + PartialEq> BuiltMap<K, V> {
    /// Returns the hash code of the contents, ignoring insertion order.
    ///
    /// Each entry contributes the combination of its key and value hashes;
    /// the entry hashes are sorted before being combined. The result is
    /// computed once.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        *self.inner.hash_code.get_or_init(|| {
            hash_unordered(
                self.inner
                    .entries
                    .iter()
                    .map(|(key, value)| hash_pair(element_hash(key), element_hash(value))),
            )
        })
    }

    fn equals_map(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.len() != other.len() || self.hash_code() != other.hash_code() {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(key).is_some_and(|other_value| other_value == value))
    }
}

impl<K, V> StructuralEq for BuiltMap<K, V>
where
    K: Hash + Eq + Any,
    V: Hash + PartialEq + Any,
{
    fn hash_code(&self) -> u64 {
        Self::hash_code(self)
    }

    fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.equals_map(other))
    }
}

impl<K: Hash + Eq, V: Hash + PartialEq> PartialEq for BuiltMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_map(other)
    }
}

impl<K: Hash + Eq, V: Hash + Eq> Eq for BuiltMap<K, V> {}

impl<K: Hash + Eq, V: Hash + PartialEq> Hash for BuiltMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`BuiltMap`], in insertion order.
pub struct BuiltMapIterator<'a, K, V> {
    inner: indexmap::map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for BuiltMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for BuiltMapIterator<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for BuiltMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for BuiltMapIterator<'_, K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for BuiltMap<K, V> {
    /// Returns another handle to the same instance.
    fn clone(&self) -> Self {
        Self {
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<K, V> Default for BuiltMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for BuiltMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl<K, V> From<IndexMap<K, V>> for BuiltMap<K, V> {
    fn from(map: IndexMap<K, V>) -> Self {
        Self::from_entries(map)
    }
}

impl<K: Hash + Eq, V, S> From<HashMap<K, V, S>> for BuiltMap<K, V> {
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> From<BTreeMap<K, V>> for BuiltMap<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for BuiltMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a BuiltMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = BuiltMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, Q, V> Index<&Q> for BuiltMap<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &Q) -> &V {
        &self.inner.entries[key]
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BuiltMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for BuiltMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Conversion Extension
// =============================================================================

/// Copies a conventional map into a [`BuiltMap`].
///
/// # Examples
///
/// ```rust
/// use built_collection::built::ToBuiltMap;
/// use std::collections::BTreeMap;
///
/// let source = BTreeMap::from([(2, "two"), (1, "one")]);
/// let map = source.to_built_map();
///
/// assert_eq!(map.keys(), &[1, 2]);
/// ```
pub trait ToBuiltMap<K, V> {
    /// Returns a built map with the same entries, in iteration order.
    fn to_built_map(&self) -> BuiltMap<K, V>;
}

impl<K: Clone + Hash + Eq, V: Clone, S: BuildHasher> ToBuiltMap<K, V> for IndexMap<K, V, S> {
    fn to_built_map(&self) -> BuiltMap<K, V> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K: Clone + Hash + Eq, V: Clone, S: BuildHasher> ToBuiltMap<K, V> for HashMap<K, V, S> {
    fn to_built_map(&self) -> BuiltMap<K, V> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K: Clone + Hash + Eq, V: Clone> ToBuiltMap<K, V> for BTreeMap<K, V> {
    fn to_built_map(&self) -> BuiltMap<K, V> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
