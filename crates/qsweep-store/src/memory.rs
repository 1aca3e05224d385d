//! In-memory watermark store for deterministic tests and demos

use crate::StoreError;
use qsweep_domain::traits::WatermarkStore;
use qsweep_domain::Timestamp;
use std::collections::HashMap;

/// HashMap-backed implementation of `WatermarkStore`
///
/// Nothing survives the process; useful as the injected fake the sweep is
/// tested against, and for dry runs that must not touch real state.
#[derive(Debug, Default)]
pub struct MemoryWatermarkStore {
    entries: HashMap<String, Timestamp>,
}

impl MemoryWatermarkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of watermarks currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no watermarks at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WatermarkStore for MemoryWatermarkStore {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<Timestamp>, Self::Error> {
        Ok(self.entries.get(key).copied())
    }

    fn set(&mut self, key: &str, at: Timestamp) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), at);
        Ok(())
    }
}
