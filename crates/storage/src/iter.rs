//! Snapshot iterators
//!
//! Entries are copied out of the store under its read lock when the
//! iterator is created, so iteration never holds the lock and never observes
//! later writes. Each iterator counts against the store's open iterators
//! until it is closed or dropped.

use crate::memory::StoreState;
use kvlens_core::{KeyValue, KeyValueIterator, StoreError, StoreResult};
use std::iter::Peekable;
use std::sync::Arc;
use std::vec;
use tracing::debug;

/// Point-in-time iterator over a store's entries
pub struct SnapshotIterator<K, V> {
    state: Arc<StoreState>,
    entries: Peekable<vec::IntoIter<KeyValue<K, V>>>,
    closed: bool,
}

impl<K, V> SnapshotIterator<K, V> {
    pub(crate) fn new(state: Arc<StoreState>, entries: Vec<KeyValue<K, V>>) -> Self {
        state.register_iterator();
        Self {
            state,
            entries: entries.into_iter().peekable(),
            closed: false,
        }
    }

    /// Number of entries not yet consumed
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }

    fn ensure_usable(&self) -> StoreResult<()> {
        if self.closed {
            return Err(StoreError::iterator_closed(self.state.name()));
        }
        self.state.ensure_open()
    }
}

impl<K, V> Iterator for SnapshotIterator<K, V> {
    type Item = StoreResult<KeyValue<K, V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.ensure_usable() {
            return Some(Err(e));
        }
        self.entries.next().map(Ok)
    }
}

impl<K, V> KeyValueIterator<K, V> for SnapshotIterator<K, V> {
    fn has_next(&mut self) -> StoreResult<bool> {
        self.ensure_usable()?;
        Ok(self.entries.peek().is_some())
    }

    fn peek_next_key(&mut self) -> StoreResult<Option<&K>> {
        self.ensure_usable()?;
        Ok(self.entries.peek().map(|kv| &kv.key))
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.entries = Vec::new().into_iter().peekable();
        self.state.release_iterator();
        debug!(store = %self.state.name(), "Released snapshot iterator");
    }
}

impl<K, V> Drop for SnapshotIterator<K, V> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<K, V> std::fmt::Debug for SnapshotIterator<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotIterator")
            .field("store", &self.state.name())
            .field("remaining", &self.remaining())
            .field("closed", &self.closed)
            .finish()
    }
}
