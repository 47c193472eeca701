//! Property-based tests for BuiltMap.
//!
//! This module verifies that BuiltMap satisfies the equality and hashing
//! laws of a value type, and that the builder round-trip preserves them,
//! using proptest.

use built_collection::built::{BuiltMap, StructuralEq};
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_map(|s| s)
}

fn arbitrary_value() -> impl Strategy<Value = i32> {
    -100..100_i32
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), arbitrary_value()), 0..30)
}

fn arbitrary_map() -> impl Strategy<Value = BuiltMap<String, i32>> {
    arbitrary_entries().prop_map(|entries| entries.into_iter().collect())
}

// =============================================================================
// Equality Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_is_reflexive(map in arbitrary_map()) {
        let copy: BuiltMap<String, i32> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(&map, &map);
        prop_assert_eq!(&map, &copy);
    }
}

proptest! {
    #[test]
    fn prop_equality_is_symmetric(first in arbitrary_map(), second in arbitrary_map()) {
        prop_assert_eq!(first == second, second == first);
    }
}

proptest! {
    #[test]
    fn prop_equality_is_transitive(entries in arbitrary_entries()) {
        let first: BuiltMap<String, i32> = entries.iter().cloned().collect();
        let second: BuiltMap<String, i32> = first.to_builder().build();
        let third: BuiltMap<String, i32> = second.iter().rev().map(|(k, v)| (k.clone(), *v)).collect();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&second, &third);
        prop_assert_eq!(&first, &third);
    }
}

// =============================================================================
// Order Independence
// =============================================================================

proptest! {
    /// Reversing the insertion order changes neither equality nor the hash code.
    #[test]
    fn prop_equality_ignores_insertion_order(entries in arbitrary_entries()) {
        // Deduplicate first so both orders agree on the final value per key
        let deduplicated: HashMap<String, i32> = entries.into_iter().collect();
        let forward: BuiltMap<String, i32> = deduplicated.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let backward: BuiltMap<String, i32> = forward.iter().rev().map(|(k, v)| (k.clone(), *v)).collect();

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.hash_code(), backward.hash_code());
    }
}

// =============================================================================
// Hash Consistency
// =============================================================================

proptest! {
    #[test]
    fn prop_equal_maps_have_equal_hash_codes(first in arbitrary_map(), second in arbitrary_map()) {
        if first == second {
            prop_assert_eq!(first.hash_code(), second.hash_code());
        }
        if first.hash_code() != second.hash_code() {
            prop_assert!(first != second);
        }
    }
}

proptest! {
    #[test]
    fn prop_hash_code_is_stable(map in arbitrary_map()) {
        prop_assert_eq!(map.hash_code(), map.hash_code());
        prop_assert_eq!(map.hash_code(), map.clone().hash_code());
    }
}

proptest! {
    #[test]
    fn prop_changing_a_value_changes_equality(map in arbitrary_map(), index in any::<prop::sample::Index>()) {
        prop_assume!(map.is_not_empty());
        let key = map.keys()[index.index(map.len())].clone();

        let changed = map.rebuild(|builder| {
            builder.update_value(&key, |value| *value += 1000);
        });
        prop_assert_ne!(&map, &changed);
    }
}

// =============================================================================
// Structural Equality Contract
// =============================================================================

proptest! {
    #[test]
    fn prop_structural_eq_agrees_with_partial_eq(first in arbitrary_map(), second in arbitrary_map()) {
        prop_assert_eq!(first.equals(&second), first == second);
        prop_assert_eq!(StructuralEq::hash_code(&first), first.hash_code());
    }
}

// =============================================================================
// Builder Laws
// =============================================================================

proptest! {
    /// An untouched builder hands back the instance it was seeded with.
    #[test]
    fn prop_to_builder_build_is_identity(map in arbitrary_map()) {
        let rebuilt = map.to_builder().build();
        prop_assert!(rebuilt.ptr_eq(&map));
        prop_assert_eq!(rebuilt, map);
    }
}

proptest! {
    #[test]
    fn prop_rebuild_is_non_destructive(
        map in arbitrary_map(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        let snapshot: Vec<(String, i32)> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let updated = map.rebuild(|builder| {
            builder.insert(key.clone(), value);
        });

        let after: Vec<(String, i32)> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(snapshot, after);
        prop_assert_eq!(updated.get(&key), Some(&value));
    }
}

proptest! {
    #[test]
    fn prop_get_after_insert(map in arbitrary_map(), key in arbitrary_key(), value in arbitrary_value()) {
        let updated = map.rebuild(|builder| {
            builder.insert(key.clone(), value);
        });
        prop_assert_eq!(updated.get(&key), Some(&value));
    }
}

proptest! {
    #[test]
    fn prop_get_after_remove(map in arbitrary_map(), key in arbitrary_key()) {
        let updated = map.rebuild(|builder| {
            builder.remove(&key);
        });
        prop_assert_eq!(updated.get(&key), None);
        prop_assert_eq!(
            updated.len(),
            map.len() - usize::from(map.contains_key(&key))
        );
    }
}

// =============================================================================
// Copy-on-write isolation
// =============================================================================

proptest! {
    /// Writes through an exported view stay in the view.
    #[test]
    fn prop_view_writes_never_reach_the_map(map in arbitrary_map(), key in arbitrary_key(), value in arbitrary_value()) {
        let before = map.get(&key).copied();
        let mut view = map.to_map();
        view.insert(key.clone(), value);
        view.remove(&key);

        prop_assert_eq!(map.get(&key).copied(), before);
    }
}
