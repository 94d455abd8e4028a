//! In-memory cache backend.
//!
//! Buckets live in a `HashMap` behind a `parking_lot::Mutex`. Nothing
//! survives the process — tests and throwaway setups use this; devices use
//! the SQLite backend.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::CacheError;

use super::traits::CacheBackend;

#[derive(Default)]
pub struct MemoryBackend {
    buckets: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheBackend for MemoryBackend {
    fn read_bucket(&self, bucket: &str) -> Result<Option<String>, CacheError> {
        Ok(self.buckets.lock().get(bucket).cloned())
    }

    fn write_bucket(&self, bucket: &str, contents: &str) -> Result<(), CacheError> {
        self.buckets
            .lock()
            .insert(bucket.to_string(), contents.to_string());
        Ok(())
    }

    fn remove_bucket(&self, bucket: &str) -> Result<(), CacheError> {
        self.buckets.lock().remove(bucket);
        Ok(())
    }
}
