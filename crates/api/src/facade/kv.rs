//! Read-only plain key-value facade over a timestamped store
//!
//! Every operation forwards to the wrapped store and removes timestamps
//! from what comes back. The facade holds no state beyond the store
//! reference: no caching, no retries, no error translation.

use super::iterator::KeyValueIteratorFacade;
use kvlens_core::{
    KeyValueIter, ReadOnlyKeyValueStore, Serializer, StoreResult, TimestampedKeyValueStore,
    ValueAndTimestamp,
};
use std::marker::PhantomData;

/// Plain key-value view of a timestamped store
///
/// Borrows the store, so the facade can never outlive it, and never closes
/// or mutates it. The facade is `Copy`; it can be shared across threads
/// whenever `&S` can.
///
/// ## Example
///
/// ```ignore
/// let store = InMemoryTimestampedStore::new("orders", StringSerializer);
/// store.put_with_timestamp("key".to_string(), "value".to_string(), 42)?;
///
/// let facade = ReadOnlyKeyValueStoreFacade::new(&store);
/// assert_eq!(facade.get(&"key".to_string())?, Some("value".to_string()));
/// ```
pub struct ReadOnlyKeyValueStoreFacade<'s, S, K, V> {
    inner: &'s S,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<'s, S, K, V> ReadOnlyKeyValueStoreFacade<'s, S, K, V>
where
    S: TimestampedKeyValueStore<K, V>,
{
    /// Wrap a timestamped store
    pub fn new(inner: &'s S) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// The wrapped store
    pub fn inner(&self) -> &'s S {
        self.inner
    }
}

impl<S, K, V> Clone for ReadOnlyKeyValueStoreFacade<'_, S, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, K, V> Copy for ReadOnlyKeyValueStoreFacade<'_, S, K, V> {}

impl<S, K, V> ReadOnlyKeyValueStore<K, V> for ReadOnlyKeyValueStoreFacade<'_, S, K, V>
where
    S: TimestampedKeyValueStore<K, V>,
{
    fn get(&self, key: &K) -> StoreResult<Option<V>> {
        self.inner.get(key).map(ValueAndTimestamp::value_or_none)
    }

    fn range(&self, from: &K, to: &K) -> StoreResult<KeyValueIter<'_, K, V>> {
        let inner = self.inner.range(from, to)?;
        Ok(Box::new(KeyValueIteratorFacade::new(inner)))
    }

    fn prefix_scan<P, PS>(
        &self,
        prefix: &P,
        prefix_serializer: &PS,
    ) -> StoreResult<KeyValueIter<'_, K, V>>
    where
        P: ?Sized,
        PS: Serializer<P>,
    {
        let inner = self.inner.prefix_scan(prefix, prefix_serializer)?;
        Ok(Box::new(KeyValueIteratorFacade::new(inner)))
    }

    fn all(&self) -> StoreResult<KeyValueIter<'_, K, V>> {
        let inner = self.inner.all()?;
        Ok(Box::new(KeyValueIteratorFacade::new(inner)))
    }

    fn approximate_num_entries(&self) -> StoreResult<u64> {
        self.inner.approximate_num_entries()
    }
}

impl<S, K, V> std::fmt::Debug for ReadOnlyKeyValueStoreFacade<'_, S, K, V>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadOnlyKeyValueStoreFacade")
            .field("inner", self.inner)
            .finish()
    }
}
