//! Deterministic hashing utilities.
//!
//! - [`element_hash`]: hashes a single key or value with the hasher selected
//!   by the crate features
//! - [`combinator`]: folds many hash codes into one
//!
//! # Hasher Selection
//!
//! | Feature   | Hasher                                   |
//! |-----------|------------------------------------------|
//! | `fxhash`  | `rustc_hash::FxHasher`                   |
//! | `ahash`   | `ahash::AHasher` with fixed seeds        |
//! | (neither) | `std::collections::hash_map::DefaultHasher` |
//!
//! Every hasher is constructed without per-process randomness, so equal
//! elements hash identically in every map and every thread.

mod combinator;

pub use combinator::{combine, finish, hash_all, hash_pair, hash_unordered};

use std::hash::{Hash, Hasher};

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
const AHASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

#[cfg(feature = "fxhash")]
fn new_hasher() -> impl Hasher {
    rustc_hash::FxHasher::default()
}

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
fn new_hasher() -> impl Hasher {
    use std::hash::BuildHasher;

    let [first, second, third, fourth] = AHASH_SEEDS;
    ahash::RandomState::with_seeds(first, second, third, fourth).build_hasher()
}

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
fn new_hasher() -> impl Hasher {
    std::collections::hash_map::DefaultHasher::new()
}

/// Computes the hash code of a single element.
///
/// # Examples
///
/// ```rust
/// use built_collection::hash::element_hash;
///
/// assert_eq!(element_hash("key"), element_hash(&"key".to_string()[..]));
/// ```
#[inline]
#[must_use]
pub fn element_hash<T: Hash + ?Sized>(element: &T) -> u64 {
    let mut hasher = new_hasher();
    element.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_element_hash_is_stable_across_calls() {
        assert_eq!(element_hash(&42_i32), element_hash(&42_i32));
        assert_eq!(element_hash("alpha"), element_hash("alpha"));
    }

    #[rstest]
    fn test_element_hash_agrees_on_borrowed_forms() {
        let owned = String::from("alpha");
        assert_eq!(element_hash(owned.as_str()), element_hash("alpha"));
    }

    #[rstest]
    fn test_element_hash_is_stable_across_threads() {
        let local = element_hash("shared");
        let remote = std::thread::spawn(|| element_hash("shared"))
            .join()
            .expect("Thread panicked");
        assert_eq!(local, remote);
    }
}
