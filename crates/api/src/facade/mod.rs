//! Facades that strip timestamps from a timestamped store's reads
//!
//! - [`ReadOnlyKeyValueStoreFacade`]: delegates every read to the store
//! - [`KeyValueIteratorFacade`]: converts the store's iterators lazily

mod iterator;
mod kv;

pub use iterator::KeyValueIteratorFacade;
pub use kv::ReadOnlyKeyValueStoreFacade;
