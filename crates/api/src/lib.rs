//! Read-only views for kvlens stores
//!
//! The facade layer lets callers that only care about values read from a
//! timestamped store through the plain [`ReadOnlyKeyValueStore`] contract.
//!
//! ## Desugaring
//!
//! | Facade | Timestamped store |
//! |--------|-------------------|
//! | `get(key)` | `get(key).map(\|v\| v.value)` |
//! | `range(from, to)` | `range(from, to)`, values stripped per entry |
//! | `prefix_scan(prefix, ser)` | `prefix_scan(prefix, ser)`, values stripped per entry |
//! | `all()` | `all()`, values stripped per entry |
//! | `approximate_num_entries()` | `approximate_num_entries()` |
//!
//! [`ReadOnlyKeyValueStore`]: kvlens_core::ReadOnlyKeyValueStore

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod facade;

pub use facade::{KeyValueIteratorFacade, ReadOnlyKeyValueStoreFacade};
