//! Store configuration
//!
//! ```ignore
//! let store = StoreBuilder::new()
//!     .name("orders")
//!     .key_serializer(StringSerializer)
//!     .build::<String, String>();
//! ```

use crate::memory::InMemoryTimestampedStore;
use kvlens_core::Serializer;
use serde::{Deserialize, Serialize};

/// Name given to stores built without an explicit name
pub const DEFAULT_STORE_NAME: &str = "in-memory-timestamped-store";

/// Configuration for an in-memory timestamped store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store name, used in errors and logs
    pub name: String,
}

impl StoreConfig {
    /// Create a config with the given store name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_NAME)
    }
}

/// Builder for in-memory timestamped stores
///
/// The key serializer fixes the store's key order. `build` is only available
/// once a serializer for the key type has been supplied.
#[derive(Debug, Clone)]
pub struct StoreBuilder<KS = ()> {
    config: StoreConfig,
    key_serializer: KS,
}

impl StoreBuilder<()> {
    /// Create a builder with default configuration and no key serializer
    pub fn new() -> Self {
        Self {
            config: StoreConfig::default(),
            key_serializer: (),
        }
    }
}

impl Default for StoreBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<KS> StoreBuilder<KS> {
    /// Set the store name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the serializer used to order keys
    pub fn key_serializer<S>(self, key_serializer: S) -> StoreBuilder<S> {
        StoreBuilder {
            config: self.config,
            key_serializer,
        }
    }

    /// Build the store
    pub fn build<K, V>(self) -> InMemoryTimestampedStore<K, V, KS>
    where
        KS: Serializer<K>,
    {
        InMemoryTimestampedStore::with_config(self.config, self.key_serializer)
    }
}
