//! Store configuration and factory.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use certmentor_core::traits::BlobStore;

use crate::local::LocalStore;
use crate::memory::MemoryStore;
use crate::s3::S3Store;

/// Configuration for the transcript store.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure
/// in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    S3 {
        bucket: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        api_key: Option<String>,
    },
    Local {
        root: PathBuf,
    },
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Local {
            root: PathBuf::from("./certmentor-transcripts"),
        }
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreConfig::S3 {
                bucket,
                base_url,
                api_key,
            } => f
                .debug_struct("S3")
                .field("bucket", bucket)
                .field("base_url", base_url)
                .field("api_key", &api_key.as_ref().map(|_| "***"))
                .finish(),
            StoreConfig::Local { root } => {
                f.debug_struct("Local").field("root", root).finish()
            }
            StoreConfig::Memory => f.debug_struct("Memory").finish(),
        }
    }
}

/// Create a store instance from its configuration.
pub fn create_store(config: &StoreConfig) -> Result<Box<dyn BlobStore>> {
    match config {
        StoreConfig::S3 {
            bucket,
            base_url,
            api_key,
        } => Ok(Box::new(S3Store::new(
            bucket,
            base_url.clone(),
            api_key.clone(),
        ))),
        StoreConfig::Local { root } => Ok(Box::new(LocalStore::new(root.clone()))),
        StoreConfig::Memory => Ok(Box::new(MemoryStore::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local() {
        assert!(matches!(StoreConfig::default(), StoreConfig::Local { .. }));
    }

    #[test]
    fn parse_tagged_store_config() {
        let toml_str = r#"
type = "s3"
bucket = "subkriti"
"#;
        let config: StoreConfig = toml::from_str(toml_str).unwrap();
        let StoreConfig::S3 { bucket, .. } = config else {
            panic!("expected s3 config");
        };
        assert_eq!(bucket, "subkriti");

        let config: StoreConfig = toml::from_str("type = \"memory\"").unwrap();
        assert!(matches!(config, StoreConfig::Memory));
    }

    #[test]
    fn debug_masks_api_key() {
        let config = StoreConfig::S3 {
            bucket: "b".into(),
            base_url: None,
            api_key: Some("super-secret".into()),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn factory_builds_each_backend() {
        assert_eq!(create_store(&StoreConfig::Memory).unwrap().name(), "memory");
        assert_eq!(
            create_store(&StoreConfig::default()).unwrap().name(),
            "local"
        );
        let s3 = StoreConfig::S3 {
            bucket: "b".into(),
            base_url: None,
            api_key: None,
        };
        assert_eq!(create_store(&s3).unwrap().name(), "s3");
    }
}
