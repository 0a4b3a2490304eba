//! S3-compatible HTTP blob store.
//!
//! Talks to any endpoint that accepts `PUT /<bucket>/<key>`, with an
//! optional bearer token for gateways that front the bucket.

use async_trait::async_trait;
use tracing::instrument;

use certmentor_core::traits::BlobStore;

use crate::error::StorageError;

const DEFAULT_BASE_URL: &str = "https://s3.us-east-1.amazonaws.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// S3-compatible object store.
pub struct S3Store {
    bucket: String,
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl S3Store {
    pub fn new(bucket: &str, base_url: Option<String>, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            bucket: bucket.to_string(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            client,
        }
    }
}

#[async_trait]
impl BlobStore for S3Store {
    fn name(&self) -> &str {
        "s3"
    }

    #[instrument(skip(self, payload), fields(bucket = %self.bucket, key))]
    async fn put(&self, key: &str, payload: &[u8]) -> anyhow::Result<()> {
        let url = format!("{}/{}/{}", self.base_url, self.bucket, key);
        let mut request = self
            .client
            .put(url)
            .header("content-type", "text/plain; charset=utf-8")
            .body(payload.to_vec());
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                StorageError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                StorageError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::ApiError { status, message }.into());
        }

        Ok(())
    }
}
