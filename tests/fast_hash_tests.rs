//! Tests for hash determinism under every hasher feature flag.
//!
//! Whichever of `fxhash`, `ahash`, or the default hasher is selected, equal
//! maps must produce equal hash codes, independent of construction path.

use built_collection::built::BuiltMap;
use built_collection::hash::{element_hash, hash_pair, hash_unordered};
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Referential Transparency Tests
// =============================================================================

#[rstest]
fn test_element_hash_is_deterministic() {
    assert_eq!(element_hash("key"), element_hash("key"));
    assert_eq!(element_hash(&42_i64), element_hash(&42_i64));
    assert_eq!(element_hash(&"key".to_string()), element_hash("key"));
}

/// The map hash is the unordered combination of per-entry pair hashes.
#[rstest]
fn test_hash_code_matches_manual_computation() {
    let map: BuiltMap<&str, i32> = [("alpha", 1), ("beta", 2)].into();
    let expected = hash_unordered([
        hash_pair(element_hash(&"alpha"), element_hash(&1)),
        hash_pair(element_hash(&"beta"), element_hash(&2)),
    ]);

    assert_eq!(map.hash_code(), expected);
}

/// Every way of constructing the same contents yields the same hash code.
#[rstest]
fn test_construction_path_does_not_affect_hash_code() {
    let entries: Vec<(String, i32)> = vec![
        ("alpha".to_string(), 1),
        ("beta".to_string(), 2),
        ("gamma".to_string(), 3),
        ("delta".to_string(), 4),
    ];

    let collected: BuiltMap<String, i32> = entries.iter().cloned().collect();
    let from_hash_map = BuiltMap::from(entries.iter().cloned().collect::<HashMap<_, _>>());
    let from_btree_map = BuiltMap::from(entries.iter().cloned().collect::<BTreeMap<_, _>>());
    let built = BuiltMap::build(|builder| builder.insert_all(entries.iter().rev().cloned()));

    assert_eq!(collected.hash_code(), from_hash_map.hash_code());
    assert_eq!(collected.hash_code(), from_btree_map.hash_code());
    assert_eq!(collected.hash_code(), built.hash_code());
}

// =============================================================================
// Large Scale Tests
// =============================================================================

#[rstest]
fn test_large_scale_insert_and_retrieve() {
    let map: BuiltMap<i32, i32> = (0..10_000).map(|index| (index, index * 2)).collect();

    assert_eq!(map.len(), 10_000);
    for index in (0..10_000).step_by(97) {
        assert_eq!(map.get(&index), Some(&(index * 2)));
    }
    assert_eq!(map.get(&10_000), None);
}

/// A single changed value is enough to change equality and the hash code.
#[rstest]
fn test_large_maps_differing_in_one_value_are_not_equal() {
    let first: BuiltMap<i32, i32> = (0..1_000).map(|index| (index, index)).collect();
    let second = first.rebuild(|builder| {
        builder.insert(500, -1);
    });

    assert_ne!(first, second);
    assert_ne!(first.hash_code(), second.hash_code());
}

#[rstest]
fn test_swapped_values_change_hash_code() {
    let first: BuiltMap<&str, i32> = [("a", 1), ("b", 2)].into();
    let second: BuiltMap<&str, i32> = [("a", 2), ("b", 1)].into();

    assert_ne!(first, second);
    assert_ne!(first.hash_code(), second.hash_code());
}
