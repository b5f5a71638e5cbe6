//! Basic Facade Read Tests
//!
//! Tests for get and approximate_num_entries.

use crate::*;

// =============================================================================
// GET TESTS
// =============================================================================

#[test]
fn test_get_returns_plain_value() {
    let store = create_store();
    put(&store, "key", "value", 42);
    let facade = create_facade(&store);

    assert_eq!(facade.get(&s("key")).unwrap(), Some(s("value")));
}

#[test]
fn test_get_unknown_key_returns_none() {
    let store = create_store();
    put(&store, "key", "value", 42);
    let facade = create_facade(&store);

    assert_eq!(facade.get(&s("unknownKey")).unwrap(), None);
}

#[test]
fn test_get_sees_latest_write() {
    let store = create_store();
    let facade = create_facade(&store);

    put(&store, "key", "v1", 1);
    assert_eq!(facade.get(&s("key")).unwrap(), Some(s("v1")));

    put(&store, "key", "v2", 2);
    assert_eq!(facade.get(&s("key")).unwrap(), Some(s("v2")));

    store.delete(&s("key")).unwrap();
    assert_eq!(facade.get(&s("key")).unwrap(), None);
}

#[test]
fn test_get_matches_store_value_for_any_timestamp() {
    let store = create_store();
    let facade = create_facade(&store);

    for (i, ts) in [i64::MIN, -1, 0, 1, i64::MAX].into_iter().enumerate() {
        let key = format!("key{}", i);
        put(&store, &key, "same", ts);

        let underlying = store.get(&key).unwrap().unwrap();
        assert_eq!(underlying.timestamp(), ts);
        assert_eq!(facade.get(&key).unwrap(), Some(underlying.into_value()));
    }
}

#[test]
fn test_get_with_wall_clock_timestamp() {
    let store = create_store();
    store.put(s("key"), s("value")).unwrap();
    let facade = create_facade(&store);

    assert_eq!(facade.get(&s("key")).unwrap(), Some(s("value")));
}

// =============================================================================
// APPROXIMATE NUM ENTRIES TESTS
// =============================================================================

#[test]
fn test_approximate_num_entries_matches_store() {
    let store = create_store();
    let facade = create_facade(&store);
    assert_eq!(facade.approximate_num_entries().unwrap(), 0);

    for i in 0..42 {
        put(&store, &format!("key{:02}", i), "v", i);
    }

    assert_eq!(
        facade.approximate_num_entries().unwrap(),
        store.approximate_num_entries().unwrap()
    );
    assert_eq!(facade.approximate_num_entries().unwrap(), 42);
}
