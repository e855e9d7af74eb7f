use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Google Translate client using the public web endpoint.
///
/// The endpoint does not require an API key but throttles aggressively,
/// so the client carries retry and rate-limit settings.
pub struct Google {
    /// Base URL of the translate endpoint
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
    /// Optional rate limit in requests per minute
    rate_limit: Option<u32>,
}

impl fmt::Debug for Google {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Google")
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// Translation request for the Google endpoint
#[derive(Debug, Clone)]
pub struct GoogleRequest {
    /// Text to translate
    pub text: String,
    /// Target language code (ISO 639-1)
    pub target_language: String,
}

impl GoogleRequest {
    /// Create a new translation request
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
        }
    }
}

/// Translation response from the Google endpoint
#[derive(Debug, Clone)]
pub struct GoogleResponse {
    /// The translated text, segments already joined
    pub translated_text: String,
    /// Detected source language, when the endpoint reports one
    pub detected_source_language: Option<String>,
}

impl Google {
    /// Create a new Google client with default retry settings
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::new_with_config(endpoint, 3, 1000, None)
    }

    /// Create a new Google client with configuration
    ///
    /// Uses connection pooling for better performance with concurrent requests.
    pub fn new_with_config(
        endpoint: impl Into<String>,
        max_retries: u32,
        backoff_base_ms: u64,
        rate_limit: Option<u32>,
    ) -> Self {
        Self {
            base_url: endpoint.into().trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Duration::from_secs(90))
                .pool_max_idle_per_host(20)
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            max_retries,
            backoff_base_ms,
            rate_limit,
        }
    }

    /// Translate text using the public endpoint with retry logic
    pub async fn translate(&self, request: &GoogleRequest) -> Result<GoogleResponse, ProviderError> {
        let url = format!("{}/translate_a/single", self.base_url);

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            // Add rate limiting if configured
            if let Some(rate_limit) = self.rate_limit {
                let delay_ms = 60_000 / rate_limit as u64;
                if attempt > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }

            let response_result = self.client.get(&url)
                .query(&[
                    ("client", "gtx"),
                    ("sl", "auto"),
                    ("tl", request.target_language.as_str()),
                    ("dt", "t"),
                    ("q", request.text.as_str()),
                ])
                .send()
                .await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let response_text = response.text().await.map_err(|e| {
                            ProviderError::ParseError(format!(
                                "Failed to get response text from Google endpoint: {}",
                                e
                            ))
                        })?;

                        return parse_response(&response_text);
                    } else if status.as_u16() == 429 {
                        // Throttled - retry after backoff
                        last_error = Some(ProviderError::RateLimitExceeded(format!(
                            "Google endpoint throttled request ({})",
                            status
                        )));
                        error!(
                            "Google endpoint throttled ({}) - attempt {}/{}",
                            status,
                            attempt + 1,
                            self.max_retries + 1
                        );
                    } else if status.is_server_error() {
                        // Server error - can retry
                        let error_text = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text.clone(),
                        });
                        error!(
                            "Google endpoint error ({}): {} - attempt {}/{}",
                            status,
                            error_text,
                            attempt + 1,
                            self.max_retries + 1
                        );
                    } else {
                        // Client error - don't retry
                        let error_text = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("Google endpoint error ({}): {}", status, error_text);
                        return Err(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    }
                }
                Err(e) => {
                    // Network error - can retry
                    last_error = Some(ProviderError::ConnectionError(format!(
                        "Failed to send request to Google endpoint: {}",
                        e
                    )));
                    error!(
                        "Google endpoint network error: {} - attempt {}/{}",
                        e,
                        attempt + 1,
                        self.max_retries + 1
                    );
                }
            }

            attempt += 1;

            // If we have more retries left, wait with exponential backoff
            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "Google endpoint request failed after {} attempts",
                self.max_retries + 1
            ))
        }))
    }
}

/// Parse the endpoint's nested-array response.
///
/// The body is a JSON array whose first element lists translated segments,
/// each segment an array whose first element is the translated text. The
/// detected source language sits at index 2 of the outer array.
fn parse_response(body: &str) -> Result<GoogleResponse, ProviderError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        ProviderError::ParseError(format!("Invalid JSON from Google endpoint: {}", e))
    })?;

    let segments = value
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            ProviderError::ParseError("Missing segment list in Google response".to_string())
        })?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(part);
        }
    }

    let detected = value
        .get(2)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    Ok(GoogleResponse {
        translated_text: translated,
        detected_source_language: detected,
    })
}

#[async_trait]
impl Provider for Google {
    type Request = GoogleRequest;
    type Response = GoogleResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        self.translate(&request).await
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.translate(&GoogleRequest::new("Hello", "fr")).await?;
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response.translated_text.clone()
    }
}
