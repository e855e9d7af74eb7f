use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// LibreTranslate client for a self-hosted or public instance
pub struct LibreTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Instance base URL
    endpoint: String,
    /// Optional API key (public instances usually require one)
    api_key: String,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

impl fmt::Debug for LibreTranslate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibreTranslate")
            .field("endpoint", &self.endpoint)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// LibreTranslate translation request
#[derive(Debug, Serialize)]
pub struct LibreTranslateRequest {
    /// Text to translate
    q: String,
    /// Source language ("auto" for detection)
    source: String,
    /// Target language code
    target: String,
    /// Response format
    format: String,
    /// API key, omitted when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    api_key: String,
}

impl LibreTranslateRequest {
    /// Create a new translation request with source auto-detection
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            q: text.into(),
            source: "auto".to_string(),
            target: target_language.into(),
            format: "text".to_string(),
            api_key: String::new(),
        }
    }

    /// Attach an API key to the request
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }
}

/// LibreTranslate translation response
#[derive(Debug, Deserialize)]
pub struct LibreTranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

impl LibreTranslate {
    /// Create a new LibreTranslate client
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new_with_config(endpoint, api_key, 3, 1000)
    }

    /// Create a new LibreTranslate client with retry configuration
    pub fn new_with_config(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Duration::from_secs(90))
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            max_retries,
            backoff_base_ms,
        }
    }

    /// Translate text with retry logic
    pub async fn translate(
        &self,
        request: &LibreTranslateRequest,
    ) -> Result<LibreTranslateResponse, ProviderError> {
        let url = format!("{}/translate", self.endpoint);

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let response_result = self.client.post(&url)
                .json(request)
                .send()
                .await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<LibreTranslateResponse>().await.map_err(|e| {
                            ProviderError::ParseError(format!(
                                "Failed to parse LibreTranslate response: {}",
                                e
                            ))
                        });
                    }

                    let status_code = status.as_u16();
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Failed to get error response text".to_string());

                    match status_code {
                        401 | 403 => {
                            error!("LibreTranslate authentication failed ({})", status_code);
                            return Err(ProviderError::AuthenticationError(error_text));
                        }
                        429 => {
                            last_error = Some(ProviderError::RateLimitExceeded(error_text.clone()));
                            error!(
                                "LibreTranslate rate limited - attempt {}/{}",
                                attempt + 1,
                                self.max_retries + 1
                            );
                        }
                        _ if status.is_server_error() => {
                            last_error = Some(ProviderError::ApiError {
                                status_code,
                                message: error_text.clone(),
                            });
                            error!(
                                "LibreTranslate error ({}): {} - attempt {}/{}",
                                status_code,
                                error_text,
                                attempt + 1,
                                self.max_retries + 1
                            );
                        }
                        _ => {
                            error!("LibreTranslate error ({}): {}", status_code, error_text);
                            return Err(ProviderError::ApiError {
                                status_code,
                                message: error_text,
                            });
                        }
                    }
                }
                Err(e) => {
                    last_error = Some(ProviderError::ConnectionError(format!(
                        "Failed to send request to LibreTranslate: {}",
                        e
                    )));
                    error!(
                        "LibreTranslate network error: {} - attempt {}/{}",
                        e,
                        attempt + 1,
                        self.max_retries + 1
                    );
                }
            }

            attempt += 1;

            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "LibreTranslate request failed after {} attempts",
                self.max_retries + 1
            ))
        }))
    }
}

#[async_trait]
impl Provider for LibreTranslate {
    type Request = LibreTranslateRequest;
    type Response = LibreTranslateResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        self.translate(&request).await
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = LibreTranslateRequest::new("Hello", "fr").api_key(self.api_key.clone());
        self.translate(&request).await?;
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response.translated_text.clone()
    }
}
