//! Collaborator traits for text generation and blob storage.
//!
//! These async traits are implemented by the `certmentor-providers` and
//! `certmentor-storage` crates respectively; the session only ever talks
//! to the trait objects.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for text-generation backends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable provider name (e.g. "bedrock").
    fn name(&self) -> &str;

    /// Generate text from a prompt. A single attempt; callers do not retry.
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse>;
}

/// Trait for key-addressed byte storage.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Human-readable store name (e.g. "s3").
    fn name(&self) -> &str;

    /// Store `payload` under `key`, overwriting any existing object.
    async fn put(&self, key: &str, payload: &[u8]) -> anyhow::Result<()>;
}

/// Request to generate text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier (e.g. "meta.llama3-70b-instruct-v1:0").
    pub model: String,
    /// The full prompt.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Response from a text-generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text.
    pub text: String,
    /// Model that actually generated the response.
    pub model: String,
    /// Token usage, when the backend reports it.
    #[serde(default)]
    pub token_usage: TokenUsage,
    /// Latency in milliseconds.
    pub latency_ms: u64,
}

/// Token usage for one generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
