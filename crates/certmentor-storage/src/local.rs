//! Local filesystem blob store.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use certmentor_core::traits::BlobStore;

use crate::error::StorageError;

/// Stores objects as files under a root directory, one file per key.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to a path under the root. Keys must stay inside the
    /// root; parent components are rejected.
    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if key.is_empty() || escapes {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid object key: {key}"),
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for LocalStore {
    fn name(&self) -> &str {
        "local"
    }

    async fn put(&self, key: &str, payload: &[u8]) -> anyhow::Result<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StorageError::Io)?;
        }
        tokio::fs::write(&path, payload)
            .await
            .map_err(StorageError::Io)?;
        Ok(())
    }
}
