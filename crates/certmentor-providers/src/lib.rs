//! certmentor-providers — text-generation backends.
//!
//! Implements the `TextGenerator` trait for Amazon Bedrock and Ollama,
//! plus a configurable mock for tests.

pub mod bedrock;
pub mod config;
pub mod error;
pub mod mock;
pub mod ollama;

pub use config::{create_provider, resolve_env_vars, resolve_provider_config, ProviderConfig};
pub use error::GenerationError;
