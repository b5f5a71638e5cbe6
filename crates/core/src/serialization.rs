//! Serializers used to encode keys and prefixes into a store's key space
//!
//! Stores order entries by the serialized bytes of their keys, so a
//! serializer fixes both equality and iteration order. Prefix scans encode
//! the prefix with a caller-supplied serializer and match it against those
//! bytes.

use crate::error::{StoreError, StoreResult};
use byteorder::{BigEndian, WriteBytesExt};

/// Encode a value of type `T` into bytes
pub trait Serializer<T: ?Sized> {
    /// Serialize `data`
    fn serialize(&self, data: &T) -> StoreResult<Vec<u8>>;
}

impl<T: ?Sized, S: Serializer<T> + ?Sized> Serializer<T> for &S {
    fn serialize(&self, data: &T) -> StoreResult<Vec<u8>> {
        (**self).serialize(data)
    }
}

/// UTF-8 encoding of strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringSerializer;

impl Serializer<str> for StringSerializer {
    fn serialize(&self, data: &str) -> StoreResult<Vec<u8>> {
        Ok(data.as_bytes().to_vec())
    }
}

impl Serializer<String> for StringSerializer {
    fn serialize(&self, data: &String) -> StoreResult<Vec<u8>> {
        self.serialize(data.as_str())
    }
}

/// Identity encoding of raw bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BytesSerializer;

impl Serializer<[u8]> for BytesSerializer {
    fn serialize(&self, data: &[u8]) -> StoreResult<Vec<u8>> {
        Ok(data.to_vec())
    }
}

impl Serializer<Vec<u8>> for BytesSerializer {
    fn serialize(&self, data: &Vec<u8>) -> StoreResult<Vec<u8>> {
        self.serialize(data.as_slice())
    }
}

/// Big-endian fixed-width encoding of `u64`
///
/// Byte order of the output matches numeric order of the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct U64Serializer;

impl Serializer<u64> for U64Serializer {
    fn serialize(&self, data: &u64) -> StoreResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(8);
        buf.write_u64::<BigEndian>(*data)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }
}
