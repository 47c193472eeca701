//! Built (immutable) collections.
//!
//! This module provides an immutable map that behaves as a value type, plus
//! the companions needed to create and export it:
//!
//! - [`BuiltMap`]: Immutable, insertion-ordered map with structural equality
//! - [`MapBuilder`]: Mutable builder producing new `BuiltMap` instances
//! - [`CopyOnWriteMap`]: Mutable map view that copies on first write
//! - [`DynamicMap`]: Type-erased source validated at construction
//!
//! # Value Semantics
//!
//! A `BuiltMap` never changes after construction. Cloning it is O(1) and
//! yields the same instance. Two maps are equal when they hold the same
//! key/value pairs, regardless of insertion order, and equal maps always have
//! equal hash codes.
//!
//! # Examples
//!
//! ## `BuiltMap`
//!
//! ```rust
//! use built_collection::built::BuiltMap;
//!
//! let map: BuiltMap<&str, i32> = [("one", 1), ("two", 2)].into();
//! let reordered: BuiltMap<&str, i32> = [("two", 2), ("one", 1)].into();
//!
//! assert_eq!(map, reordered);
//! assert_eq!(map.keys(), &["one", "two"]);
//! ```
//!
//! ## `MapBuilder`
//!
//! ```rust
//! use built_collection::built::BuiltMap;
//!
//! let map: BuiltMap<&str, i32> = [("x", 1)].into();
//! let updated = map.rebuild(|builder| {
//!     builder.insert("y", 2);
//! });
//!
//! assert_eq!(map.len(), 1);     // Original unchanged
//! assert_eq!(updated.len(), 2); // New version
//! ```
//!
//! ## `CopyOnWriteMap`
//!
//! ```rust
//! use built_collection::built::BuiltMap;
//!
//! let map: BuiltMap<&str, i32> = [("x", 1)].into();
//! let mut view = map.to_map();
//! assert!(!view.is_copied());
//!
//! view.insert("y", 2);
//! assert!(view.is_copied());
//! assert_eq!(map.get("y"), None);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets built maps be shared across threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets built maps be shared across threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

mod builder;
mod copy_on_write;
mod dynamic;
mod error;
mod map;

pub use builder::MapBuilder;
pub use copy_on_write::CopyOnWriteMap;
pub use dynamic::{DynamicEntry, DynamicMap, Unspecified};
pub use error::{BuiltMapError, ElementRole};
pub use map::{BuiltMap, BuiltMapIterator, StructuralEq, ToBuiltMap};

// =============================================================================
// Tests
// =============================================================================
