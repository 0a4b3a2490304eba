//! Top-level certmentor configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use certmentor_core::session::GenerationSettings;
use certmentor_core::traits::{BlobStore, TextGenerator};
use certmentor_providers::{create_provider, resolve_env_vars, ProviderConfig};
use certmentor_storage::{create_store, StoreConfig};

/// Top-level certmentor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorConfig {
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Where mentor transcripts are persisted.
    #[serde(default)]
    pub storage: StoreConfig,
    /// Default provider to use.
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Default model to use.
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Sampling temperature for all generations.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Max tokens per generation.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Key prefix for persisted transcripts.
    #[serde(default = "default_transcript_prefix")]
    pub transcript_prefix: String,
}

fn default_provider() -> String {
    "bedrock".to_string()
}
fn default_model() -> String {
    "meta.llama3-70b-instruct-v1:0".to_string()
}
fn default_temperature() -> f64 {
    0.7
}
fn default_max_tokens() -> u32 {
    2048
}
fn default_transcript_prefix() -> String {
    "certmaster-answers".to_string()
}

impl Default for MentorConfig {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
            storage: StoreConfig::default(),
            default_provider: default_provider(),
            default_model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            transcript_prefix: default_transcript_prefix(),
        }
    }
}

impl MentorConfig {
    /// Session settings derived from this config, with an optional model
    /// override from the command line.
    pub fn settings(&self, model_override: Option<&str>) -> GenerationSettings {
        GenerationSettings {
            model: model_override.unwrap_or(&self.default_model).to_string(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            transcript_prefix: self.transcript_prefix.clone(),
        }
    }

    /// Build the configured text generator, with an optional provider-name
    /// override from the command line.
    pub fn build_generator(
        &self,
        provider_override: Option<&str>,
    ) -> Result<Arc<dyn TextGenerator>> {
        let name = provider_override.unwrap_or(&self.default_provider);
        let provider_config = self.providers.get(name).ok_or_else(|| {
            anyhow::anyhow!(
                "provider '{}' not found in config. Available: {:?}. \
                 Run `certmentor init` to create a config file.",
                name,
                self.providers.keys().collect::<Vec<_>>()
            )
        })?;
        Ok(Arc::from(create_provider(provider_config)?))
    }

    /// Build the configured blob store.
    pub fn build_store(&self) -> Result<Arc<dyn BlobStore>> {
        Ok(Arc::from(create_store(&self.storage)?))
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `certmentor.toml` in the current directory
/// 2. `~/.config/certmentor/config.toml`
///
/// Environment variable override: `CERTMENTOR_BEDROCK_KEY`.
pub fn load_config_from(path: Option<&Path>) -> Result<MentorConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("certmentor.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MentorConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MentorConfig::default(),
    };

    // Apply env var overrides
    if let Ok(key) = std::env::var("CERTMENTOR_BEDROCK_KEY") {
        config
            .providers
            .entry("bedrock".into())
            .or_insert(ProviderConfig::Bedrock {
                api_key: String::new(),
                base_url: None,
            });
        if let Some(ProviderConfig::Bedrock { api_key, .. }) = config.providers.get_mut("bedrock") {
            *api_key = key;
        }
    }

    // Resolve env vars in all provider configs and the store config
    let resolved: HashMap<String, ProviderConfig> = config
        .providers
        .iter()
        .map(|(k, v)| {
            (
                k.clone(),
                certmentor_providers::resolve_provider_config(v),
            )
        })
        .collect();
    config.providers = resolved;
    config.storage = resolve_store_config(&config.storage);

    Ok(config)
}

fn resolve_store_config(config: &StoreConfig) -> StoreConfig {
    match config {
        StoreConfig::S3 {
            bucket,
            base_url,
            api_key,
        } => StoreConfig::S3 {
            bucket: resolve_env_vars(bucket),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
            api_key: api_key.as_ref().map(|k| resolve_env_vars(k)),
        },
        other => other.clone(),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("certmentor"))
}
