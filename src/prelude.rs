//! Convenient imports for kvlens.
//!
//! ```ignore
//! use kvlens::prelude::*;
//! ```

// Views
pub use crate::{KeyValueIteratorFacade, ReadOnlyKeyValueStoreFacade};

// Contracts
pub use crate::{KeyValueIterator, ReadOnlyKeyValueStore, TimestampedKeyValueStore};

// Error handling
pub use crate::{StoreError, StoreResult};

// Core types
pub use crate::{KeyValue, Timestamp, ValueAndTimestamp};

// Serializers
pub use crate::{BytesSerializer, Serializer, StringSerializer, U64Serializer};

// Storage
pub use crate::{InMemoryTimestampedStore, StoreBuilder, StoreConfig};
