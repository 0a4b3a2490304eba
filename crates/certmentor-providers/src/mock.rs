//! Mock provider for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use certmentor_core::traits::{GenerateRequest, GenerateResponse, TextGenerator, TokenUsage};

use crate::error::GenerationError;

/// A mock text generator for driving the session without real API calls.
///
/// Returns configurable replies based on prompt substring matching, or a
/// fixed failure.
pub struct MockProvider {
    /// Map of prompt substring → reply text.
    replies: HashMap<String, String>,
    /// Default reply if no prompt matches.
    default_reply: String,
    /// When set, every call fails with this network-error message.
    failure: Option<String>,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<GenerateRequest>>,
}

impl MockProvider {
    /// Create a mock with the given substring→reply mappings.
    pub fn new(replies: HashMap<String, String>) -> Self {
        Self {
            replies,
            default_reply: "mock reply".to_string(),
            failure: None,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that always returns the same reply.
    pub fn with_fixed_reply(reply: &str) -> Self {
        Self {
            replies: HashMap::new(),
            default_reply: reply.to_string(),
            failure: None,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that fails every call.
    pub fn failing(message: &str) -> Self {
        Self {
            replies: HashMap::new(),
            default_reply: String::new(),
            failure: Some(message.to_string()),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of calls made to this provider.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The last request made to this provider.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(message) = &self.failure {
            return Err(GenerationError::NetworkError(message.clone()).into());
        }

        let text = self
            .replies
            .iter()
            .find(|(key, _)| request.prompt.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_reply.clone());

        let completion_tokens = (text.len() / 4) as u32; // Rough estimate
        let prompt_tokens = (request.prompt.len() / 4) as u32;

        Ok(GenerateResponse {
            text,
            model: request.model.clone(),
            token_usage: TokenUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
            latency_ms: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: "mock-model".into(),
            prompt: prompt.into(),
            max_tokens: 100,
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn fixed_reply() {
        let provider = MockProvider::with_fixed_reply("Day 1 - IAM");
        let response = provider.generate(&request("anything")).await.unwrap();
        assert_eq!(response.text, "Day 1 - IAM");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.last_request().unwrap().prompt, "anything");
    }

    #[tokio::test]
    async fn prompt_matching() {
        let mut replies = HashMap::new();
        replies.insert("study plan".to_string(), "Day 1 - VPC".to_string());
        replies.insert(
            "multiple-choice".to_string(),
            "Q1: What?\nA) This\nAnswer: A - yes".to_string(),
        );
        let provider = MockProvider::new(replies);

        let plan = provider
            .generate(&request("Create a study plan please"))
            .await
            .unwrap();
        assert_eq!(plan.text, "Day 1 - VPC");

        let quiz = provider
            .generate(&request("Generate 5 multiple-choice questions"))
            .await
            .unwrap();
        assert!(quiz.text.starts_with("Q1:"));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn failing_mock_fails() {
        let provider = MockProvider::failing("simulated outage");
        let err = provider.generate(&request("anything")).await.unwrap_err();
        assert!(err.to_string().contains("simulated outage"));
        assert_eq!(provider.call_count(), 1);
    }
}
