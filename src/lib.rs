//! # built-collection
//!
//! Immutable, insertion-ordered maps that behave as values.
//!
//! ## Overview
//!
//! - **Built Map**: [`BuiltMap`](built::BuiltMap), an immutable map with
//!   order-independent equality and a cached hash code
//! - **Builder**: [`MapBuilder`](built::MapBuilder), batches mutations and
//!   produces new instances
//! - **Copy-on-write export**: [`CopyOnWriteMap`](built::CopyOnWriteMap), a
//!   mutable view that copies only when first written
//! - **Hashing**: deterministic element hashing and hash combination
//!
//! ## Feature Flags
//!
//! - `arc` (default): share instances across threads (`Arc` instead of `Rc`)
//! - `fxhash`: hash elements with `FxHasher`
//! - `ahash`: hash elements with a fixed-seed `AHasher`
//!
//! ## Example
//!
//! ```rust
//! use built_collection::prelude::*;
//!
//! let map: BuiltMap<&str, i32> = [("a", 1), ("b", 2)].into();
//! let same: BuiltMap<&str, i32> = [("b", 2), ("a", 1)].into();
//! assert_eq!(map, same);
//!
//! let mut builder = map.to_builder();
//! builder.insert("c", 3);
//! let extended = builder.build();
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(extended.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use built_collection::prelude::*;
/// ```
pub mod prelude {
    pub use crate::built::*;
}

pub mod built;
pub mod hash;
