//! Type-erased construction sources.
//!
//! [`DynamicMap`] holds key/value pairs whose types are only known at run
//! time. Building a typed [`BuiltMap`](super::BuiltMap) from it validates each
//! element against the declared key and value types.
//!
//! [`Unspecified`] is the default type parameter of `BuiltMap`. It stands for
//! "no concrete type given" and is rejected by the validating constructors.

use std::any::{Any, type_name};
use std::fmt;

/// Marker for a key or value type that was never pinned.
///
/// Writing `BuiltMap` without type arguments in type position yields
/// `BuiltMap<Unspecified, Unspecified>`. The type has no values, so such a map
/// can never hold an element.
///
/// Only the validating constructors, [`BuiltMap::try_new`](super::BuiltMap::try_new)
/// and [`BuiltMap::try_from_source`](super::BuiltMap::try_from_source), report it
/// as [`BuiltMapError::MissingTypeParameter`](super::BuiltMapError::MissingTypeParameter);
/// `BuiltMap::new`, `BuiltMap::build` and `MapBuilder::new` accept it and
/// produce an empty map.
///
/// # Examples
///
/// ```rust
/// use built_collection::built::{BuiltMap, BuiltMapError, DynamicMap};
///
/// let source = DynamicMap::new().with_entry(1_i32, "one");
/// let result: Result<BuiltMap, _> = BuiltMap::try_from_source(&source);
///
/// assert!(matches!(result, Err(BuiltMapError::MissingTypeParameter { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unspecified {}

/// A single type-erased entry of a [`DynamicMap`].
pub struct DynamicEntry {
    key: Box<dyn Any>,
    key_type: &'static str,
    value: Box<dyn Any>,
    value_type: &'static str,
}

impl DynamicEntry {
    /// Erases the types of `key` and `value`, remembering their names.
    pub fn new<K: Any, V: Any>(key: K, value: V) -> Self {
        Self {
            key: Box::new(key),
            key_type: type_name::<K>(),
            value: Box::new(value),
            value_type: type_name::<V>(),
        }
    }

    /// Returns the key if it is a `K`.
    #[must_use]
    pub fn key<K: Any>(&self) -> Option<&K> {
        self.key.downcast_ref()
    }

    /// Returns the value if it is a `V`.
    #[must_use]
    pub fn value<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref()
    }

    /// Name of the key's concrete type.
    #[must_use]
    pub const fn key_type(&self) -> &'static str {
        self.key_type
    }

    /// Name of the value's concrete type.
    #[must_use]
    pub const fn value_type(&self) -> &'static str {
        self.value_type
    }
}

impl fmt::Debug for DynamicEntry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DynamicEntry")
            .field("key_type", &self.key_type)
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}

/// An ordered, type-erased collection of key/value pairs.
///
/// `DynamicMap` does not deduplicate keys (it cannot compare them); when it
/// is turned into a typed map, a later duplicate overwrites the value of the
/// earlier one and keeps the earlier position.
///
/// # Examples
///
/// ```rust
/// use built_collection::built::{BuiltMap, DynamicMap};
///
/// let source = DynamicMap::new()
///     .with_entry(1_i32, String::from("one"))
///     .with_entry(2_i32, String::from("two"));
///
/// let map = BuiltMap::<i32, String>::try_from_source(&source).unwrap();
/// assert_eq!(map.get(&2).map(String::as_str), Some("two"));
/// ```
#[derive(Debug, Default)]
pub struct DynamicMap {
    entries: Vec<DynamicEntry>,
}

impl DynamicMap {
    /// Creates an empty `DynamicMap`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn insert<K: Any, V: Any>(&mut self, key: K, value: V) {
        self.entries.push(DynamicEntry::new(key, value));
    }

    /// Appends an entry and returns the map, for chained construction.
    #[must_use]
    pub fn with_entry<K: Any, V: Any>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DynamicEntry> {
        self.entries.iter()
    }
}

impl FromIterator<DynamicEntry> for DynamicMap {
    fn from_iter<I: IntoIterator<Item = DynamicEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DynamicMap {
    type Item = &'a DynamicEntry;
    type IntoIter = std::slice::Iter<'a, DynamicEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
