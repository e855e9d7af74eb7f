use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// DeepL client for interacting with the DeepL API
pub struct DeepL {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

impl fmt::Debug for DeepL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepL")
            .field("endpoint", &self.endpoint)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// DeepL translation request
#[derive(Debug, Serialize)]
pub struct DeepLRequest {
    /// Texts to translate (the API accepts a batch; we send one at a time)
    text: Vec<String>,
    /// Target language code (DeepL expects uppercase)
    target_lang: String,
}

impl DeepLRequest {
    /// Create a new translation request
    pub fn new(text: impl Into<String>, target_language: &str) -> Self {
        Self {
            text: vec![text.into()],
            target_lang: target_language.to_uppercase(),
        }
    }
}

/// DeepL translation response
#[derive(Debug, Deserialize)]
pub struct DeepLResponse {
    /// Translations, one per input text
    pub translations: Vec<DeepLTranslation>,
}

/// A single translation in a DeepL response
#[derive(Debug, Deserialize)]
pub struct DeepLTranslation {
    /// Detected source language
    #[serde(default)]
    pub detected_source_language: Option<String>,

    /// The translated text
    pub text: String,
}

impl DeepL {
    /// Create a new DeepL client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new_with_config(api_key, endpoint, 3, 1000)
    }

    /// Create a new DeepL client with retry configuration
    pub fn new_with_config(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
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
            api_key: api_key.into(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            max_retries,
            backoff_base_ms,
        }
    }

    /// Translate text with retry logic
    pub async fn translate(&self, request: &DeepLRequest) -> Result<DeepLResponse, ProviderError> {
        let url = format!("{}/v2/translate", self.endpoint);

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let response_result = self.client.post(&url)
                .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
                .json(request)
                .send()
                .await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<DeepLResponse>().await.map_err(|e| {
                            ProviderError::ParseError(format!(
                                "Failed to parse DeepL API response: {}",
                                e
                            ))
                        });
                    }

                    let status_code = status.as_u16();
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Failed to get error response text".to_string());

                    match status_code {
                        401 | 403 => {
                            // Bad or missing API key - don't retry
                            error!("DeepL API authentication failed ({})", status_code);
                            return Err(ProviderError::AuthenticationError(error_text));
                        }
                        429 | 456 => {
                            // 456 is DeepL's quota-exceeded status
                            last_error = Some(ProviderError::RateLimitExceeded(error_text.clone()));
                            error!(
                                "DeepL API rate limited ({}) - attempt {}/{}",
                                status_code,
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
                                "DeepL API error ({}): {} - attempt {}/{}",
                                status_code,
                                error_text,
                                attempt + 1,
                                self.max_retries + 1
                            );
                        }
                        _ => {
                            // Other client errors - don't retry
                            error!("DeepL API error ({}): {}", status_code, error_text);
                            return Err(ProviderError::ApiError {
                                status_code,
                                message: error_text,
                            });
                        }
                    }
                }
                Err(e) => {
                    last_error = Some(ProviderError::ConnectionError(format!(
                        "Failed to send request to DeepL API: {}",
                        e
                    )));
                    error!(
                        "DeepL API network error: {} - attempt {}/{}",
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
                "DeepL API request failed after {} attempts",
                self.max_retries + 1
            ))
        }))
    }
}

#[async_trait]
impl Provider for DeepL {
    type Request = DeepLRequest;
    type Response = DeepLResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        self.translate(&request).await
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.translate(&DeepLRequest::new("Hello", "fr")).await?;
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response
            .translations
            .first()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }
}
