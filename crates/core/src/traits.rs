//! Read contracts for key-value stores
//!
//! [`ReadOnlyKeyValueStore`] is the plain read contract. A timestamped store
//! is nothing more than a read-only store whose values are
//! [`ValueAndTimestamp`]s, expressed by [`TimestampedKeyValueStore`].
//!
//! ## Iterator lifetime
//!
//! Iterators borrow the store they came from, so they can never outlive it.
//! They may hold backend resources (snapshots, cursors) which are released by
//! [`KeyValueIterator::close`] or, failing that, when the iterator is dropped.

use crate::error::StoreResult;
use crate::serialization::Serializer;
use crate::types::{KeyValue, ValueAndTimestamp};

/// A closeable, peekable iterator over store entries
///
/// `next()` yields `None` once exhausted and `Some(Err(..))` when the
/// backing store fails, including when the iterator is used after `close`.
pub trait KeyValueIterator<K, V>: Iterator<Item = StoreResult<KeyValue<K, V>>> {
    /// Check whether another entry is available
    fn has_next(&mut self) -> StoreResult<bool>;

    /// Peek at the key of the next entry without consuming it
    ///
    /// Returns `Ok(None)` when the iterator is exhausted.
    fn peek_next_key(&mut self) -> StoreResult<Option<&K>>;

    /// Release any resources held by the iterator
    ///
    /// Calling `close` more than once has no further effect.
    fn close(&mut self);
}

/// Boxed iterator borrowed from a store
pub type KeyValueIter<'a, K, V> = Box<dyn KeyValueIterator<K, V> + 'a>;

/// Plain key-value read contract
pub trait ReadOnlyKeyValueStore<K, V> {
    /// Get the value for a key
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    fn get(&self, key: &K) -> StoreResult<Option<V>>;

    /// Iterate over entries with keys between `from` and `to`
    ///
    /// Bound inclusivity and ordering are defined by the store.
    fn range(&self, from: &K, to: &K) -> StoreResult<KeyValueIter<'_, K, V>>;

    /// Iterate over entries whose key starts with `prefix`
    ///
    /// `prefix_serializer` encodes the prefix into the store's key space.
    fn prefix_scan<P, PS>(
        &self,
        prefix: &P,
        prefix_serializer: &PS,
    ) -> StoreResult<KeyValueIter<'_, K, V>>
    where
        P: ?Sized,
        PS: Serializer<P>;

    /// Iterate over every entry in the store's key order
    fn all(&self) -> StoreResult<KeyValueIter<'_, K, V>>;

    /// Estimated number of entries
    ///
    /// May be stale, and may count entries that are logically deleted.
    fn approximate_num_entries(&self) -> StoreResult<u64>;
}

/// A read-only store whose values carry their last-modification timestamp
pub trait TimestampedKeyValueStore<K, V>: ReadOnlyKeyValueStore<K, ValueAndTimestamp<V>> {}

impl<K, V, S> TimestampedKeyValueStore<K, V> for S where
    S: ReadOnlyKeyValueStore<K, ValueAndTimestamp<V>>
{
}
