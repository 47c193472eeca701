//! Jenkins one-at-a-time hash combination.
//!
//! These functions fold many 64-bit hash codes into one. The result depends on
//! the order of the inputs, so callers that need an order-independent hash sort
//! their inputs first (see [`hash_unordered`]).
//!
//! # Examples
//!
//! ```rust
//! use built_collection::hash::{hash_all, hash_unordered};
//!
//! assert_eq!(hash_all([1, 2, 3]), hash_all([1, 2, 3]));
//! assert_ne!(hash_all([1, 2, 3]), hash_all([3, 2, 1]));
//! assert_eq!(hash_unordered([1, 2, 3]), hash_unordered([3, 2, 1]));
//! ```

use smallvec::SmallVec;

/// Mixes `value` into the running `hash`.
#[inline]
#[must_use]
pub const fn combine(hash: u64, value: u64) -> u64 {
    let hash = hash.wrapping_add(value);
    let hash = hash.wrapping_add(hash << 10);
    hash ^ (hash >> 6)
}

/// Final avalanche step applied once all values are combined.
#[inline]
#[must_use]
pub const fn finish(hash: u64) -> u64 {
    let hash = hash.wrapping_add(hash << 3);
    let hash = hash ^ (hash >> 11);
    hash.wrapping_add(hash << 15)
}

/// Combines exactly two hash codes, e.g. a key hash with its value hash.
///
/// # Examples
///
/// ```rust
/// use built_collection::hash::hash_pair;
///
/// assert_ne!(hash_pair(1, 2), hash_pair(2, 1));
/// ```
#[inline]
#[must_use]
pub const fn hash_pair(first: u64, second: u64) -> u64 {
    finish(combine(combine(0, first), second))
}

/// Combines a sequence of hash codes into one, respecting their order.
///
/// Deterministic: the same sequence always yields the same result.
#[must_use]
pub fn hash_all<I>(hashes: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    finish(hashes.into_iter().fold(0, combine))
}

/// Combines hash codes so that their order does not matter.
///
/// The inputs are sorted before being passed to [`hash_all`].
#[must_use]
pub fn hash_unordered<I>(hashes: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut sorted: SmallVec<[u64; 16]> = hashes.into_iter().collect();
    sorted.sort_unstable();
    hash_all(sorted)
}
