//! Concurrent Facade Use Tests
//!
//! The facade holds only a shared reference, so one facade can serve many
//! reader threads while a writer updates the store.

use crate::*;
use std::thread;

#[test]
fn test_shared_facade_across_threads() {
    let store = create_store();
    for i in 0..100 {
        put(&store, &format!("key{:03}", i), &format!("value{}", i), i);
    }
    let facade = create_facade(&store);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                scope.spawn(move || {
                    let key = format!("key{:03}", t * 10);
                    assert_eq!(facade.get(&key).unwrap(), Some(format!("value{}", t * 10)));
                    collect(facade.all().unwrap()).len()
                })
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), 100);
        }
    });

    assert_eq!(store.open_iterators(), 0);
}

#[test]
fn test_readers_with_concurrent_writer() {
    let store = create_store();
    let facade = create_facade(&store);

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..200 {
                put(&store, &format!("key{:03}", i), "v", i);
            }
        });

        for _ in 0..4 {
            scope.spawn(move || {
                for _ in 0..50 {
                    let keys: Vec<_> = collect(facade.all().unwrap())
                        .into_iter()
                        .map(|kv| kv.key)
                        .collect();
                    let mut sorted = keys.clone();
                    sorted.sort();
                    assert_eq!(keys, sorted);
                }
            });
        }
    });

    assert_eq!(facade.approximate_num_entries().unwrap(), 200);
    assert_eq!(store.open_iterators(), 0);
}
