//! Core types and read contracts for kvlens
//!
//! This crate defines the vocabulary shared by every store and view:
//! - [`KeyValue`]: a key paired with its value
//! - [`ValueAndTimestamp`]: a value paired with its last-modification time
//! - [`ReadOnlyKeyValueStore`] / [`TimestampedKeyValueStore`]: read contracts
//! - [`KeyValueIterator`]: closeable, peekable entry iterators
//! - [`Serializer`]: encoders used to map prefixes into a store's key space

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod serialization;
pub mod traits;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use serialization::{BytesSerializer, Serializer, StringSerializer, U64Serializer};
pub use traits::{KeyValueIter, KeyValueIterator, ReadOnlyKeyValueStore, TimestampedKeyValueStore};
pub use types::{KeyValue, Timestamp, ValueAndTimestamp};
