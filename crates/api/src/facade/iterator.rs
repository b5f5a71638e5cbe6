//! Iterator adapter that drops timestamps from streamed entries

use kvlens_core::{
    KeyValue, KeyValueIter, KeyValueIterator, StoreResult, ValueAndTimestamp,
};
use tracing::trace;

/// Plain-value view of a timestamped entry iterator
///
/// Each call to `next` pulls exactly one entry from the wrapped iterator and
/// returns it with the timestamp removed. Nothing is buffered, and failures
/// from the wrapped iterator are returned as-is.
///
/// The wrapped iterator is closed by [`close`](KeyValueIterator::close), or
/// when the adapter is dropped without having been closed.
pub struct KeyValueIteratorFacade<'a, K, V> {
    inner: KeyValueIter<'a, K, ValueAndTimestamp<V>>,
    closed: bool,
}

impl<'a, K, V> KeyValueIteratorFacade<'a, K, V> {
    /// Wrap a timestamped entry iterator
    pub fn new(inner: KeyValueIter<'a, K, ValueAndTimestamp<V>>) -> Self {
        Self {
            inner,
            closed: false,
        }
    }
}

impl<K, V> Iterator for KeyValueIteratorFacade<'_, K, V> {
    type Item = StoreResult<KeyValue<K, V>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|entry| entry.map(|kv| kv.map_value(ValueAndTimestamp::into_value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> KeyValueIterator<K, V> for KeyValueIteratorFacade<'_, K, V> {
    fn has_next(&mut self) -> StoreResult<bool> {
        self.inner.has_next()
    }

    fn peek_next_key(&mut self) -> StoreResult<Option<&K>> {
        self.inner.peek_next_key()
    }

    fn close(&mut self) {
        trace!("Closing key-value iterator facade");
        self.closed = true;
        self.inner.close();
    }
}

impl<K, V> Drop for KeyValueIteratorFacade<'_, K, V> {
    fn drop(&mut self) {
        if !self.closed {
            self.close();
        }
    }
}

impl<K, V> std::fmt::Debug for KeyValueIteratorFacade<'_, K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyValueIteratorFacade")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
