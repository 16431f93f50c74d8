//! # Outbound Ports (Driven Ports)
//!
//! The ordered key-value store is an external collaborator. This crate
//! only defines the keys; module logic reads and writes them through this
//! interface.

use crate::domain::errors::StoreError;

/// Result of a prefix scan: `(key, value)` pairs.
pub type ScanResult = Vec<(Vec<u8>, Vec<u8>)>;

/// Abstract interface for an ordered, byte-keyed store.
///
/// Testing: `InMemoryOrderedStore` (adapters/memory.rs)
pub trait OrderedKeyValueStore {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Delete a key.
    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError>;

    /// Iterate over keys with a prefix.
    ///
    /// Entries come back in ascending byte-lexicographic key order; the
    /// numeric ordering of big-endian key fields depends on it.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, StoreError>;
}
