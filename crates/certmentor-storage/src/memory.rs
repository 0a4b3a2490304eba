//! In-memory blob store for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use certmentor_core::traits::BlobStore;

use crate::error::StorageError;

/// A blob store backed by a map, inspectable from tests. Objects live as
/// long as the store; nothing is durable.
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    /// When set, every put fails with this network-error message.
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every put, for exercising storage-failure paths.
    pub fn failing(message: &str) -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            failure: Some(message.to_string()),
        }
    }

    /// The stored payload for `key`, if any.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    /// All stored keys, unordered.
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn put(&self, key: &str, payload: &[u8]) -> anyhow::Result<()> {
        if let Some(message) = &self.failure {
            return Err(StorageError::NetworkError(message.clone()).into());
        }
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_vec());
        Ok(())
    }
}
