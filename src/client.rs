//! HTTP client for the streaming generation endpoint.
//!
//! Sends a prompt to `streamGenerateContent?alt=sse` and exposes the chunked
//! response body as [`TransportEvent`]s. Decoding happens elsewhere; this
//! module only moves bytes.

use async_trait::async_trait;
use futures::stream;
use futures_util::StreamExt;
use reqwest::header::RETRY_AFTER;
use reqwest::Client;

use crate::config::Config;
use crate::error::{classify_reqwest_error, status_error, ConfigError, NetworkError};
use crate::models::GenerateRequest;
use crate::stream::TransportEvent;
use crate::traits::{ResponseTransport, TransportStream};

/// Client for the streaming generation API.
pub struct GeminiClient {
    config: Config,
    /// Reusable HTTP client
    client: Client,
}

impl GeminiClient {
    /// Create a client. Fails if the config has no API key.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_http_client(config, Client::new())
    }

    /// Create a client around an existing reqwest client.
    pub fn with_http_client(config: Config, client: Client) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the request body for a prompt according to the config.
    pub fn build_request(&self, prompt: &str) -> GenerateRequest {
        let request = GenerateRequest::new(prompt).with_google_search(self.config.google_search);
        if self.config.include_thoughts {
            request.with_thoughts(true)
        } else {
            request
        }
    }

    /// Send a prompt and stream the response body.
    ///
    /// # Returns
    /// A stream of `Data` chunks followed by `Completed`, or `Failed` if the
    /// body breaks off.
    pub async fn stream(&self, prompt: &str) -> Result<TransportStream, NetworkError> {
        // Key-free: safe to log and to put in errors.
        let endpoint = self.config.stream_url();
        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        tracing::debug!("POST {} (model {})", endpoint, self.config.model);

        let response = self
            .client
            .post(&endpoint)
            .query(&[("alt", "sse"), ("key", api_key)])
            .header("Accept", "text/event-stream")
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| classify_reqwest_error(e, &endpoint))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok());
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status, message, retry_after));
        }

        let events = response
            .bytes_stream()
            .map(move |chunk| match chunk {
                Ok(bytes) => TransportEvent::Data(bytes),
                Err(e) => TransportEvent::Failed(classify_reqwest_error(e, &endpoint)),
            })
            .chain(stream::once(async { TransportEvent::Completed }));

        Ok(Box::pin(events))
    }
}

#[async_trait]
impl ResponseTransport for GeminiClient {
    async fn open(&self, prompt: &str) -> Result<TransportStream, NetworkError> {
        self.stream(prompt).await
    }
}
