//! Amazon Bedrock runtime provider.
//!
//! Invokes a Bedrock text model over the runtime HTTP API using a
//! Bedrock API key (bearer token). The response body differs per model
//! family: Llama models return `generation`, Titan models return
//! `outputText`; both are accepted.

use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use certmentor_core::traits::{GenerateRequest, GenerateResponse, TextGenerator, TokenUsage};

use crate::error::GenerationError;

const DEFAULT_BASE_URL: &str = "https://bedrock-runtime.us-east-1.amazonaws.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Bedrock runtime provider.
pub struct BedrockProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl BedrockProvider {
    pub fn new(api_key: &str, base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        }
    }
}

#[derive(Serialize)]
struct InvokeRequest<'a> {
    prompt: &'a str,
    max_gen_len: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    generation: Option<String>,
    #[serde(default, rename = "outputText")]
    output_text: Option<String>,
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    generation_token_count: Option<u32>,
}

#[derive(Deserialize)]
struct BedrockError {
    message: String,
}

#[async_trait]
impl TextGenerator for BedrockProvider {
    fn name(&self) -> &str {
        "bedrock"
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let start = Instant::now();

        let body = InvokeRequest {
            prompt: &request.prompt,
            max_gen_len: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/model/{}/invoke", self.base_url, request.model))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else {
                    GenerationError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5)
                * 1000;
            return Err(GenerationError::RateLimited {
                retry_after_ms: retry_after,
            }
            .into());
        }
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::AuthenticationFailed(body).into());
        }
        if status == 404 {
            return Err(GenerationError::ModelNotFound(request.model.clone()).into());
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<BedrockError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(GenerationError::ApiError { status, message }.into());
        }

        let api_response: InvokeResponse =
            response
                .json()
                .await
                .map_err(|e| GenerationError::ApiError {
                    status: 0,
                    message: format!("failed to parse response: {e}"),
                })?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let text = api_response
            .generation
            .or(api_response.output_text)
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(
                GenerationError::UnusableOutput("model returned no text".into()).into(),
            );
        }

        let prompt_tokens = api_response.prompt_token_count.unwrap_or(0);
        let completion_tokens = api_response.generation_token_count.unwrap_or(0);

        Ok(GenerateResponse {
            text,
            model: request.model.clone(),
            token_usage: TokenUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
            latency_ms,
        })
    }
}
