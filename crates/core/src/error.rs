//! Error types for store operations
//!
//! A missing key is never an error; reads return `Ok(None)` instead.
//! Views over a store propagate these errors untouched.

use thiserror::Error;

/// Errors raised by stores and their iterators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store has been closed
    #[error("store {store} is closed")]
    StoreClosed {
        /// Name of the closed store
        store: String,
    },

    /// The iterator has been closed
    #[error("iterator over store {store} is closed")]
    IteratorClosed {
        /// Name of the store the iterator was opened on
        store: String,
    },

    /// A serializer could not encode its input
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backend failure
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create a store-closed error
    pub fn store_closed(store: impl Into<String>) -> Self {
        StoreError::StoreClosed {
            store: store.into(),
        }
    }

    /// Create an iterator-closed error
    pub fn iterator_closed(store: impl Into<String>) -> Self {
        StoreError::IteratorClosed {
            store: store.into(),
        }
    }

    /// Check if this error comes from using a closed store or iterator
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            StoreError::StoreClosed { .. } | StoreError::IteratorClosed { .. }
        )
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, StoreError::Serialization(_))
    }
}
