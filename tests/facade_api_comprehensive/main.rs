//! Facade API Comprehensive Test Suite
//!
//! This suite runs the read-only facade against the in-memory timestamped
//! store and checks that every read matches the store's own answer with
//! timestamps removed.
//!
//! ## Key Verification Points
//!
//! 1. Values match the store; timestamps never leak through
//! 2. Iteration order, bounds and emptiness are exactly the store's
//! 3. Store errors surface unchanged
//! 4. Iterators release store resources on every exit path
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all facade tests
//! cargo test --test facade_api_comprehensive
//!
//! # Run iteration tests only
//! cargo test --test facade_api_comprehensive kv::iteration
//! ```

use kvlens::prelude::*;
use kvlens::KeyValueIter;
use tracing_subscriber::EnvFilter;


// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Store type used throughout the suite
pub type TestStore = InMemoryTimestampedStore<String, String, StringSerializer>;

/// Facade over [`TestStore`]
pub type TestFacade<'s> = ReadOnlyKeyValueStoreFacade<'s, TestStore, String, String>;

/// Install a test-friendly tracing subscriber (honours `RUST_LOG`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Create an empty store
pub fn create_store() -> TestStore {
    init_tracing();
    StoreBuilder::new()
        .name("facade-tests")
        .key_serializer(StringSerializer)
        .build()
}

/// Create a store holding `key1 -> (value1, 21)` and `key2 -> (value2, 42)`
pub fn create_populated_store() -> TestStore {
    let store = create_store();
    put(&store, "key1", "value1", 21);
    put(&store, "key2", "value2", 42);
    store
}

/// Create a facade over a store
pub fn create_facade(store: &TestStore) -> TestFacade<'_> {
    ReadOnlyKeyValueStoreFacade::new(store)
}

/// Put with an explicit timestamp
pub fn put(store: &TestStore, key: &str, value: &str, timestamp: Timestamp) {
    store
        .put_with_timestamp(s(key), s(value), timestamp)
        .expect("put failed");
}

/// Owned string shorthand
pub fn s(value: &str) -> String {
    value.to_string()
}

/// Plain pair shorthand
pub fn plain(key: &str, value: &str) -> KeyValue<String, String> {
    KeyValue::pair(s(key), s(value))
}

/// Drain a facade iterator, failing the test on any error
pub fn collect(iter: KeyValueIter<'_, String, String>) -> Vec<KeyValue<String, String>> {
    iter.collect::<StoreResult<_>>().expect("iteration failed")
}

/// Drain a store iterator and strip timestamps by hand
pub fn collect_stripped(
    iter: KeyValueIter<'_, String, ValueAndTimestamp<String>>,
) -> Vec<KeyValue<String, String>> {
    iter.map(|kv| kv.expect("iteration failed").map_value(ValueAndTimestamp::into_value))
        .collect()
}
