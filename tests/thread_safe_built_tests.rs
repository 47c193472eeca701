//! Integration tests for sharing built maps across threads.
//!
//! These tests verify that a BuiltMap can be read from many threads at once
//! with the `arc` feature enabled, and that its lazily computed caches are
//! initialized exactly once.

#![cfg(feature = "arc")]

use built_collection::built::BuiltMap;
use rstest::rstest;
use std::sync::{Arc, Barrier};
use std::thread;

fn sample(size: i32) -> BuiltMap<String, i32> {
    (0..size).map(|index| (format!("key{index}"), index)).collect()
}

// =============================================================================
// Concurrent reads
// =============================================================================

/// Clones of one map can be read from several threads at once.
#[rstest]
fn test_cross_thread_reads() {
    let map = sample(100);

    let handles: Vec<_> = (0..4)
        .map(|thread_index| {
            let map = map.clone();
            thread::spawn(move || {
                for index in (thread_index..100).step_by(4) {
                    assert_eq!(map.get(&format!("key{index}")), Some(&index));
                }
                map.len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), 100);
    }
}

/// Threads racing on the first `keys`/`values`/`hash_code` call all observe one cached result.
#[rstest]
fn test_concurrent_first_access_yields_one_cache() {
    let map = sample(500);
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let map = map.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let keys_address = map.keys().as_ptr() as usize;
                let values_address = map.values().as_ptr() as usize;
                (map.hash_code(), keys_address, values_address)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for result in &results {
        assert_eq!(*result, results[0]);
    }
    assert_eq!(results[0].0, map.hash_code());
    assert_eq!(results[0].1, map.keys().as_ptr() as usize);
}

// =============================================================================
// Building on other threads
// =============================================================================

/// Rebuilding on other threads never changes the shared original.
#[rstest]
fn test_rebuild_on_each_thread_leaves_original_intact() {
    let map = sample(10);

    let handles: Vec<_> = (0..4)
        .map(|thread_index| {
            let map = map.clone();
            thread::spawn(move || {
                map.rebuild(|builder| {
                    builder.insert(format!("thread{thread_index}"), thread_index);
                })
            })
        })
        .collect();

    let results: Vec<BuiltMap<String, i32>> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    assert_eq!(map.len(), 10);
    for (thread_index, result) in (0..).zip(&results) {
        assert_eq!(result.len(), 11);
        assert_eq!(result.get(&format!("thread{thread_index}")), Some(&thread_index));
    }
}

/// Hash codes do not depend on the thread or insertion order.
#[rstest]
fn test_maps_built_on_different_threads_are_equal() {
    let handles: Vec<_> = (0..4)
        .map(|thread_index| {
            thread::spawn(move || {
                let mut entries: Vec<(String, i32)> =
                    (0..50).map(|index| (format!("key{index}"), index)).collect();
                entries.rotate_left(thread_index * 10);
                entries.into_iter().collect::<BuiltMap<String, i32>>()
            })
        })
        .collect();

    let results: Vec<BuiltMap<String, i32>> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for result in &results {
        assert_eq!(result, &results[0]);
        assert_eq!(result.hash_code(), results[0].hash_code());
    }
}
