use crate::domain::errors::StoreError;
use crate::ports::outbound::{OrderedKeyValueStore, ScanResult};
use std::collections::BTreeMap;

/// In-memory ordered store for unit tests.
///
/// A `BTreeMap` keeps keys in byte-lexicographic order, matching what a
/// production LSM store returns from an iterator.
#[derive(Debug, Default)]
pub struct InMemoryOrderedStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryOrderedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl OrderedKeyValueStore for InMemoryOrderedStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        tracing::trace!(
            "[qc-18] put {} bytes under tag 0x{:02x}",
            value.len(),
            key.first().copied().unwrap_or_default()
        );
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.data.remove(key);
        Ok(())
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, StoreError> {
        let results: ScanResult = self
            .data
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        tracing::trace!("[qc-18] prefix scan returned {} entries", results.len());
        Ok(results)
    }
}
