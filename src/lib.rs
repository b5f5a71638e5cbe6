//! # kvlens
//!
//! Read-only plain key-value views over timestamped stores.
//!
//! A timestamped store keeps `(value, timestamp)` pairs. Callers that only
//! need values read through a [`ReadOnlyKeyValueStoreFacade`] instead of
//! unpacking timestamps at every call site.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kvlens::prelude::*;
//!
//! let store = InMemoryTimestampedStore::new("orders", StringSerializer);
//! store.put_with_timestamp("key1".to_string(), "value1".to_string(), 21)?;
//!
//! let view = ReadOnlyKeyValueStoreFacade::new(&store);
//! assert_eq!(view.get(&"key1".to_string())?, Some("value1".to_string()));
//!
//! for entry in view.all()? {
//!     let KeyValue { key, value } = entry?;
//!     println!("{key} = {value}");
//! }
//! ```
//!
//! ## Crates
//!
//! - `kvlens-core`: entry types, errors, read contracts, serializers
//! - `kvlens-storage`: in-memory timestamped store
//! - `kvlens-api`: the read-only facade and its iterator adapter

#![warn(missing_docs)]

pub mod prelude;

pub use kvlens_api::{KeyValueIteratorFacade, ReadOnlyKeyValueStoreFacade};
pub use kvlens_core::{
    BytesSerializer, KeyValue, KeyValueIter, KeyValueIterator, ReadOnlyKeyValueStore, Serializer,
    StoreError, StoreResult, StringSerializer, Timestamp, TimestampedKeyValueStore, U64Serializer,
    ValueAndTimestamp,
};
pub use kvlens_storage::{InMemoryTimestampedStore, StoreBuilder, StoreConfig};
