//! Entry types shared by stores and views
//!
//! - [`KeyValue`]: the element type every store iterator yields
//! - [`ValueAndTimestamp`]: the value type of timestamped stores

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// A key and its associated value
///
/// Timestamped stores yield `KeyValue<K, ValueAndTimestamp<V>>`; plain views
/// over them yield `KeyValue<K, V>`.
///
/// # Examples
///
/// ```
/// use kvlens_core::KeyValue;
///
/// let kv = KeyValue::pair("user:1", 42);
/// assert_eq!(kv.key, "user:1");
/// assert_eq!(kv.value, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValue<K, V> {
    /// The entry's key
    pub key: K,
    /// The entry's value
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Create a new key-value pair
    pub fn pair(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Replace the value with `f(value)`, keeping the key untouched
    pub fn map_value<U, F>(self, f: F) -> KeyValue<K, U>
    where
        F: FnOnce(V) -> U,
    {
        KeyValue {
            key: self.key,
            value: f(self.value),
        }
    }

    /// Split into a `(key, value)` tuple
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::pair(key, value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for KeyValue<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyValue({}, {})", self.key, self.value)
    }
}

/// A value and the time it was last modified
///
/// Produced and owned by timestamped stores. The timestamp is opaque to
/// readers that only need the value.
///
/// # Examples
///
/// ```
/// use kvlens_core::ValueAndTimestamp;
///
/// let vat = ValueAndTimestamp::make("value", 42);
/// assert_eq!(vat.timestamp(), 42);
/// assert_eq!(vat.into_value(), "value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueAndTimestamp<V> {
    value: V,
    timestamp: Timestamp,
}

impl<V> ValueAndTimestamp<V> {
    /// Pair a value with its timestamp
    pub fn make(value: V, timestamp: Timestamp) -> Self {
        Self { value, timestamp }
    }

    /// Borrow the value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Last-modification timestamp in milliseconds
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Consume and return the value, discarding the timestamp
    pub fn into_value(self) -> V {
        self.value
    }

    /// Extract the value from an optional entry
    ///
    /// `None` stays `None`; this is how a missing key reads through a plain view.
    pub fn value_or_none(entry: Option<Self>) -> Option<V> {
        entry.map(Self::into_value)
    }
}

impl<V: fmt::Display> fmt::Display for ValueAndTimestamp<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.value, self.timestamp)
    }
}
