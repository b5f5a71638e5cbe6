//! Storage layer for kvlens
//!
//! This crate implements an in-memory timestamped key-value store:
//! - InMemoryTimestampedStore: BTreeMap keyed by serialized key, behind a RwLock
//! - SnapshotIterator: point-in-time iterators with open-iterator accounting
//! - StoreConfig / StoreBuilder: store configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod iter;
pub mod memory;

pub use config::{StoreBuilder, StoreConfig, DEFAULT_STORE_NAME};
pub use iter::SnapshotIterator;
pub use memory::InMemoryTimestampedStore;
