//! In-memory timestamped store
//!
//! Entries are kept in a `BTreeMap` keyed by the serialized key, so
//! iteration order is the byte order of the key serializer's output.
//!
//! # Thread Safety
//!
//! All operations take `&self`:
//! - reads take the read lock only long enough to look up or copy entries
//! - writes take the write lock for a single insert or remove
//! - iterators are snapshots and hold no lock

use crate::config::StoreConfig;
use crate::iter::SnapshotIterator;
use chrono::Utc;
use kvlens_core::{
    KeyValue, KeyValueIter, ReadOnlyKeyValueStore, Serializer, StoreError, StoreResult,
    Timestamp, ValueAndTimestamp,
};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Lifecycle state shared between a store and its iterators
#[derive(Debug)]
pub(crate) struct StoreState {
    name: String,
    open: AtomicBool,
    open_iterators: AtomicUsize,
}

impl StoreState {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            open: AtomicBool::new(true),
            open_iterators: AtomicUsize::new(0),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    pub(crate) fn ensure_open(&self) -> StoreResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(StoreError::store_closed(&self.name))
        }
    }

    /// Returns true if this call closed the store
    pub(crate) fn mark_closed(&self) -> bool {
        self.open.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn open_iterators(&self) -> usize {
        self.open_iterators.load(Ordering::Acquire)
    }

    pub(crate) fn register_iterator(&self) {
        self.open_iterators.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn release_iterator(&self) {
        self.open_iterators.fetch_sub(1, Ordering::AcqRel);
    }
}

type Entry<K, V> = KeyValue<K, ValueAndTimestamp<V>>;

/// In-memory store of `(value, timestamp)` pairs
///
/// # Example
///
/// ```ignore
/// use kvlens_core::{ReadOnlyKeyValueStore, StringSerializer};
/// use kvlens_storage::InMemoryTimestampedStore;
///
/// let store = InMemoryTimestampedStore::new("orders", StringSerializer);
/// store.put_with_timestamp("key".to_string(), "value".to_string(), 42)?;
/// let vat = store.get(&"key".to_string())?.unwrap();
/// assert_eq!(vat.timestamp(), 42);
/// ```
pub struct InMemoryTimestampedStore<K, V, KS> {
    state: Arc<StoreState>,
    data: RwLock<BTreeMap<Vec<u8>, Entry<K, V>>>,
    key_serializer: KS,
}

impl<K, V, KS> InMemoryTimestampedStore<K, V, KS> {
    /// Create an open, empty store with the given name
    pub fn new(name: impl Into<String>, key_serializer: KS) -> Self {
        Self::with_config(StoreConfig::new(name), key_serializer)
    }

    /// Create an open, empty store from a config
    pub fn with_config(config: StoreConfig, key_serializer: KS) -> Self {
        debug!(store = %config.name, "Opened in-memory timestamped store");
        Self {
            state: Arc::new(StoreState::new(config.name)),
            data: RwLock::new(BTreeMap::new()),
            key_serializer,
        }
    }

    /// Store name
    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// Check if the store is open
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Number of iterators that have been opened and not yet closed or dropped
    pub fn open_iterators(&self) -> usize {
        self.state.open_iterators()
    }

    /// Close the store
    ///
    /// Drops all entries. Later reads and writes fail with
    /// [`StoreError::StoreClosed`], as does further use of iterators that
    /// are still open. Closing twice has no further effect.
    pub fn close(&self) {
        if !self.state.mark_closed() {
            return;
        }
        let open = self.state.open_iterators();
        if open > 0 {
            warn!(
                store = %self.name(),
                open_iterators = open,
                "Closing store with open iterators"
            );
        }
        self.data.write().clear();
        debug!(store = %self.name(), "Closed in-memory timestamped store");
    }
}

impl<K, V, KS> InMemoryTimestampedStore<K, V, KS>
where
    K: Clone,
    V: Clone,
    KS: Serializer<K>,
{
    /// Put a value stamped with the current wall-clock time
    ///
    /// Returns the previous entry, if any.
    pub fn put(&self, key: K, value: V) -> StoreResult<Option<ValueAndTimestamp<V>>> {
        self.put_with_timestamp(key, value, Utc::now().timestamp_millis())
    }

    /// Put a value with an explicit timestamp
    ///
    /// Returns the previous entry, if any.
    pub fn put_with_timestamp(
        &self,
        key: K,
        value: V,
        timestamp: Timestamp,
    ) -> StoreResult<Option<ValueAndTimestamp<V>>> {
        self.state.ensure_open()?;
        let raw = self.key_serializer.serialize(&key)?;
        let entry = KeyValue::pair(key, ValueAndTimestamp::make(value, timestamp));
        Ok(self.data.write().insert(raw, entry).map(|old| old.value))
    }

    /// Put a value only if the key is absent
    ///
    /// Returns the existing entry if there was one, in which case nothing
    /// is written.
    pub fn put_if_absent(
        &self,
        key: K,
        value: V,
        timestamp: Timestamp,
    ) -> StoreResult<Option<ValueAndTimestamp<V>>> {
        self.state.ensure_open()?;
        let raw = self.key_serializer.serialize(&key)?;
        let mut data = self.data.write();
        if let Some(existing) = data.get(&raw) {
            return Ok(Some(existing.value.clone()));
        }
        data.insert(raw, KeyValue::pair(key, ValueAndTimestamp::make(value, timestamp)));
        Ok(None)
    }

    /// Delete a key
    ///
    /// Returns the removed entry if it existed.
    pub fn delete(&self, key: &K) -> StoreResult<Option<ValueAndTimestamp<V>>> {
        self.state.ensure_open()?;
        let raw = self.key_serializer.serialize(key)?;
        Ok(self.data.write().remove(&raw).map(|old| old.value))
    }

    fn snapshot_iter(&self, entries: Vec<Entry<K, V>>) -> KeyValueIter<'_, K, ValueAndTimestamp<V>> {
        Box::new(SnapshotIterator::new(Arc::clone(&self.state), entries))
    }
}

impl<K, V, KS> ReadOnlyKeyValueStore<K, ValueAndTimestamp<V>> for InMemoryTimestampedStore<K, V, KS>
where
    K: Clone,
    V: Clone,
    KS: Serializer<K>,
{
    fn get(&self, key: &K) -> StoreResult<Option<ValueAndTimestamp<V>>> {
        self.state.ensure_open()?;
        let raw = self.key_serializer.serialize(key)?;
        Ok(self.data.read().get(&raw).map(|entry| entry.value.clone()))
    }

    /// Both bounds are inclusive.
    fn range(&self, from: &K, to: &K) -> StoreResult<KeyValueIter<'_, K, ValueAndTimestamp<V>>> {
        self.state.ensure_open()?;
        let from_raw = self.key_serializer.serialize(from)?;
        let to_raw = self.key_serializer.serialize(to)?;

        if from_raw > to_raw {
            warn!(
                store = %self.name(),
                "Returning empty iterator for range with from key greater than to key. \
                 Check the argument order and that the key serializer preserves ordering"
            );
            return Ok(self.snapshot_iter(Vec::new()));
        }

        let entries = self
            .data
            .read()
            .range(from_raw..=to_raw)
            .map(|(_, entry)| entry.clone())
            .collect();
        Ok(self.snapshot_iter(entries))
    }

    fn prefix_scan<P, PS>(
        &self,
        prefix: &P,
        prefix_serializer: &PS,
    ) -> StoreResult<KeyValueIter<'_, K, ValueAndTimestamp<V>>>
    where
        P: ?Sized,
        PS: Serializer<P>,
    {
        self.state.ensure_open()?;
        let raw_prefix = prefix_serializer.serialize(prefix)?;

        let entries = self
            .data
            .read()
            .range(raw_prefix.clone()..)
            .take_while(|(raw, _)| raw.starts_with(&raw_prefix))
            .map(|(_, entry)| entry.clone())
            .collect();
        Ok(self.snapshot_iter(entries))
    }

    fn all(&self) -> StoreResult<KeyValueIter<'_, K, ValueAndTimestamp<V>>> {
        self.state.ensure_open()?;
        let entries = self.data.read().values().cloned().collect();
        Ok(self.snapshot_iter(entries))
    }

    fn approximate_num_entries(&self) -> StoreResult<u64> {
        self.state.ensure_open()?;
        Ok(self.data.read().len() as u64)
    }
}

impl<K, V, KS> std::fmt::Debug for InMemoryTimestampedStore<K, V, KS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTimestampedStore")
            .field("name", &self.name())
            .field("open", &self.is_open())
            .field("entries", &self.data.read().len())
            .field("open_iterators", &self.open_iterators())
            .finish()
    }
}
